// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

// All currently supported image formats
pub const SUPPORTED_IMAGE_FORMATS: [&str; 13] = [
    "bmp", "dds", "ico", "jpeg", "jpg", "png", "pbm", "pgm", "ppm", "qoi", "tga", "tif", "tiff",
];

// Color boundaries as ([lower], [upper]) pairs in blue-green-red order. The
// order is reversed into the decoded red-green-blue order on use.
pub const COLOR_BOUNDARIES_BGR: [([u8; 3], [u8; 3]); 4] = [
    ([17, 15, 100], [50, 56, 200]),
    ([86, 31, 4], [220, 88, 50]),
    ([25, 146, 190], [62, 174, 250]),
    ([103, 86, 65], [145, 133, 128]),
];

// Value assigned to pixels inside a color boundary
pub const MASK_ON: u8 = 255;

// Hard default settings for montage construction
pub const MONTAGE_CELL_WIDTH: u32 = 128;
pub const MONTAGE_CELL_HEIGHT: u32 = 196;
pub const MONTAGE_COLUMNS: u32 = 7;
pub const MONTAGE_ROWS: u32 = 3;
pub const MONTAGE_SAMPLE: usize = 21;
