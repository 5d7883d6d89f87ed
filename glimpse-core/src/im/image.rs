// Copyright (c) 2025, Tom Ouellette
// Licensed under the MIT License

use std::path::Path;

use image::{ImageReader, RgbImage, imageops};

use crate::constant;
use crate::error::GlimpseError;

/// Open an image from a provided path as 8-bit red-green-blue pixels
///
/// Alpha channels are dropped and grayscale images are expanded to three
/// channels so every decoded image shares the same pixel layout.
///
/// # Arguments
///
/// * `path` - A path to an image with a valid extension
///
/// # Errors
///
/// * `NoFileError` if the path does not resolve to a file
/// * `ImageExtensionError` if the extension is not a supported image format
/// * `ImageReadError` if the file content cannot be decoded
///
/// ```no_run
/// use glimpse_core::im::open_image;
/// let image = open_image("image.png");
/// ```
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, GlimpseError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(GlimpseError::NoFileError(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match extension {
        Some(ext) if constant::SUPPORTED_IMAGE_FORMATS.contains(&ext.as_str()) => {
            let image = ImageReader::open(path)
                .and_then(|reader| reader.with_guessed_format())
                .map_err(|err| GlimpseError::ImageReadError(err.to_string()))?
                .decode()
                .map_err(|err| {
                    GlimpseError::ImageReadError(format!("{} ({})", err, path.display()))
                })?;

            Ok(image.to_rgb8())
        }
        _ => Err(GlimpseError::ImageExtensionError),
    }
}

/// Place images left to right into a single image
///
/// # Arguments
///
/// * `images` - Images that all share the same height
///
/// # Examples
///
/// ```
/// use image::RgbImage;
/// use glimpse_core::im::hstack;
///
/// let a = RgbImage::new(2, 3);
/// let b = RgbImage::new(4, 3);
///
/// let stacked = hstack(&[&a, &b]).unwrap();
/// assert_eq!(stacked.dimensions(), (6, 3));
/// ```
pub fn hstack(images: &[&RgbImage]) -> Result<RgbImage, GlimpseError> {
    let height = images.first().map(|image| image.height()).unwrap_or(0);

    if images.iter().any(|image| image.height() != height) {
        return Err(GlimpseError::OtherError(
            "Horizontally stacked images must share the same height".to_string(),
        ));
    }

    let width = images.iter().map(|image| image.width()).sum();
    let mut stacked = RgbImage::new(width, height);

    let mut x = 0;
    for image in images {
        imageops::replace(&mut stacked, *image, x as i64, 0);
        x += image.width();
    }

    Ok(stacked)
}
