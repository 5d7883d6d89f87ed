// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use fast_image_resize::{FilterType, PixelType, images::Image};
use image::{DynamicImage, RgbImage};

use crate::error::GlimpseError;

/// Resize an RGB image using the SIMD-accelerated fast-image-resize crate
///
/// The aspect ratio is not preserved; the full source is stretched or
/// squeezed to exactly `new_width` x `new_height`.
///
/// # Arguments
///
/// * `image` - A u8 RGB image
/// * `new_width` - New width following resizing
/// * `new_height` - New height following resizing
pub fn resize_bilinear_fast(
    image: &RgbImage,
    new_width: u32,
    new_height: u32,
) -> Result<RgbImage, GlimpseError> {
    if image.dimensions() == (new_width, new_height) {
        return Ok(image.clone());
    }

    let source = DynamicImage::ImageRgb8(image.clone());
    let mut destination = Image::new(new_width, new_height, PixelType::U8x3);

    let mut resizer = fast_image_resize::Resizer::new();
    let option = fast_image_resize::ResizeOptions {
        algorithm: fast_image_resize::ResizeAlg::Convolution(FilterType::Bilinear),
        cropping: fast_image_resize::SrcCropping::None,
        mul_div_alpha: false,
    };

    resizer
        .resize(&source, &mut destination, &option)
        .map_err(|err| GlimpseError::OtherError(format!("Failed to resize image. {}", err)))?;

    RgbImage::from_raw(new_width, new_height, destination.into_vec())
        .ok_or(GlimpseError::BufferSizeError)
}
