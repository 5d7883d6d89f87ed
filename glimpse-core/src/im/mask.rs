// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::Path;

use image::GrayImage;

use crate::error::GlimpseError;

/// A row-major container storing binary mask pixels
///
/// Masks produced by thresholding hold `MASK_ON` (255) where the pixel at
/// the same position in the source image is selected and 0 otherwise. Any
/// nonzero value counts as selected. The length of the container must be
/// equal to the product of `w` * `h`.
///
/// # Examples
///
/// ```
/// use glimpse_core::im::ColorMask;
///
/// let mask = ColorMask::new(2, 2, vec![0, 255, 255, 0]);
/// assert_eq!(mask.unwrap().count(), 2);
///
/// let mask = ColorMask::new(2, 2, vec![0, 255]);
/// assert!(mask.is_err()); // Buffer size does not match dimensions
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMask {
    w: u32,           // Width
    h: u32,           // Height
    buffer: Vec<u8>,  // Pixels
}

impl ColorMask {
    /// Initializes a mask from a raw buffer
    ///
    /// # Arguments
    ///
    /// * `width` - Mask width
    /// * `height` - Mask height
    /// * `buffer` - Row-major mask values
    pub fn new(width: u32, height: u32, buffer: Vec<u8>) -> Result<ColorMask, GlimpseError> {
        if width as usize * height as usize == buffer.len() {
            Ok(ColorMask {
                w: width,
                h: height,
                buffer,
            })
        } else {
            Err(GlimpseError::BufferSizeError)
        }
    }

    // Caller guarantees buffer.len() == width * height
    pub(crate) fn from_parts(width: u32, height: u32, buffer: Vec<u8>) -> ColorMask {
        debug_assert_eq!(width as usize * height as usize, buffer.len());
        ColorMask {
            w: width,
            h: height,
            buffer,
        }
    }

    /// Width of the mask
    pub fn width(&self) -> u32 {
        self.w
    }

    /// Height of the mask
    pub fn height(&self) -> u32 {
        self.h
    }

    /// Width and height of the mask
    pub fn dimensions(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    /// Length of the raw mask
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if mask is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the pixel at (x, y) is selected, `None` if out of bounds
    pub fn is_on(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.w || y >= self.h {
            return None;
        }

        Some(self.buffer[(y as usize) * (self.w as usize) + x as usize] != 0)
    }

    /// Number of selected pixels
    pub fn count(&self) -> usize {
        self.buffer.iter().filter(|&&v| v != 0).count()
    }

    /// Returns the raw mask
    pub fn into_raw(self) -> Vec<u8> {
        self.buffer
    }

    /// Returns a reference to the raw mask
    pub fn as_raw(&self) -> &[u8] {
        &self.buffer
    }

    /// Convert the mask to a grayscale image
    pub fn to_image(&self) -> Result<GrayImage, GlimpseError> {
        GrayImage::from_raw(self.w, self.h, self.buffer.clone()).ok_or(GlimpseError::BufferSizeError)
    }

    /// Save the mask as a grayscale image
    ///
    /// # Arguments
    ///
    /// * `path` - A path to an image with a valid extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GlimpseError> {
        self.to_image()?
            .save(path)
            .map_err(|err| GlimpseError::ImageWriteError(err.to_string()))
    }
}
