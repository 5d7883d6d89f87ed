// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use image::RgbImage;
use rayon::prelude::*;

use crate::constant::{COLOR_BOUNDARIES_BGR, MASK_ON};
use crate::error::GlimpseError;
use crate::im::ColorMask;

/// An inclusive per-channel color range
///
/// The `lower` and `upper` bounds are stored in the same channel order as
/// the images they are applied to (red, green, blue for decoded images).
///
/// # Examples
///
/// ```
/// use glimpse_core::cv::ColorBoundary;
///
/// let red = ColorBoundary::from_bgr([17, 15, 100], [50, 56, 200]);
///
/// assert_eq!(red.lower, [100, 15, 17]);
/// assert!(red.contains(&[150, 30, 40]));
/// assert!(!red.contains(&[99, 30, 40]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBoundary {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorBoundary {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> ColorBoundary {
        ColorBoundary { lower, upper }
    }

    /// Initialize a boundary from blue-green-red ordered bounds
    pub fn from_bgr(lower: [u8; 3], upper: [u8; 3]) -> ColorBoundary {
        ColorBoundary {
            lower: [lower[2], lower[1], lower[0]],
            upper: [upper[2], upper[1], upper[0]],
        }
    }

    /// Check if every channel of a pixel lies within [lower, upper]
    pub fn contains(&self, pixel: &[u8]) -> bool {
        pixel
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(value, (lower, upper))| lower <= value && value <= upper)
    }
}

/// The four hard-coded boundaries in iteration order
pub fn default_boundaries() -> Vec<ColorBoundary> {
    COLOR_BOUNDARIES_BGR
        .iter()
        .map(|(lower, upper)| ColorBoundary::from_bgr(*lower, *upper))
        .collect()
}

/// Compute a binary mask of the pixels that fall within a boundary
///
/// # Arguments
///
/// * `image` - A three channel image
/// * `boundary` - Inclusive per-channel range
pub fn in_range(image: &RgbImage, boundary: &ColorBoundary) -> ColorMask {
    let buffer: Vec<u8> = image
        .as_raw()
        .par_chunks_exact(3)
        .map(|pixel| if boundary.contains(pixel) { MASK_ON } else { 0 })
        .collect();

    ColorMask::from_parts(image.width(), image.height(), buffer)
}

/// Keep image pixels where the mask is nonzero and zero all other pixels
///
/// # Arguments
///
/// * `image` - A three channel image
/// * `mask` - A mask with the same width and height as `image`
pub fn bitwise_and(image: &RgbImage, mask: &ColorMask) -> Result<RgbImage, GlimpseError> {
    if image.dimensions() != mask.dimensions() {
        return Err(GlimpseError::MaskSizeError);
    }

    let mut output = image.clone();

    output
        .pixels_mut()
        .zip(mask.as_raw())
        .filter(|(_, m)| **m == 0)
        .for_each(|(pixel, _)| pixel.0 = [0, 0, 0]);

    Ok(output)
}

#[cfg(test)]
mod test {

    use super::*;
    use image::Rgb;

    fn single_pixel(value: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(1, 1, Rgb(value))
    }

    #[test]
    fn test_from_bgr_reverses_channels() {
        let boundary = ColorBoundary::from_bgr([1, 2, 3], [4, 5, 6]);
        assert_eq!(boundary.lower, [3, 2, 1]);
        assert_eq!(boundary.upper, [6, 5, 4]);
    }

    #[test]
    fn test_default_boundaries_order() {
        let boundaries = default_boundaries();

        assert_eq!(boundaries.len(), 4);
        assert_eq!(boundaries[0], ColorBoundary::new([100, 15, 17], [200, 56, 50]));
        assert_eq!(boundaries[1], ColorBoundary::new([4, 31, 86], [50, 88, 220]));
        assert_eq!(boundaries[2], ColorBoundary::new([190, 146, 25], [250, 174, 62]));
        assert_eq!(boundaries[3], ColorBoundary::new([65, 86, 103], [128, 133, 145]));
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        for boundary in default_boundaries() {
            let mask = in_range(&single_pixel(boundary.lower), &boundary);
            assert_eq!(mask.is_on(0, 0), Some(true));

            let mask = in_range(&single_pixel(boundary.upper), &boundary);
            assert_eq!(mask.is_on(0, 0), Some(true));
        }
    }

    #[test]
    fn test_in_range_below_lower_bound() {
        for boundary in default_boundaries() {
            for channel in 0..3 {
                let mut value = boundary.lower;
                if value[channel] == 0 {
                    continue;
                }
                value[channel] -= 1;

                let mask = in_range(&single_pixel(value), &boundary);
                assert_eq!(mask.is_on(0, 0), Some(false), "channel {}", channel);
            }
        }
    }

    #[test]
    fn test_in_range_above_upper_bound() {
        for boundary in default_boundaries() {
            for channel in 0..3 {
                let mut value = boundary.upper;
                if value[channel] == 255 {
                    continue;
                }
                value[channel] += 1;

                let mask = in_range(&single_pixel(value), &boundary);
                assert_eq!(mask.is_on(0, 0), Some(false), "channel {}", channel);
            }
        }
    }

    #[test]
    fn test_in_range_mask_values() {
        let boundary = ColorBoundary::new([10, 10, 10], [20, 20, 20]);
        let image = RgbImage::from_raw(3, 1, vec![15, 15, 15, 0, 0, 0, 20, 10, 15]).unwrap();

        let mask = in_range(&image, &boundary);

        assert_eq!(mask.dimensions(), (3, 1));
        assert_eq!(mask.as_raw(), &[255, 0, 255]);
    }

    #[test]
    fn test_bitwise_and_keeps_and_zeroes() {
        let boundary = ColorBoundary::new([10, 10, 10], [20, 20, 20]);
        let image =
            RgbImage::from_raw(2, 2, vec![11, 12, 13, 200, 0, 0, 0, 0, 0, 20, 20, 20]).unwrap();

        let mask = in_range(&image, &boundary);
        let output = bitwise_and(&image, &mask).unwrap();

        assert_eq!(output.get_pixel(0, 0), &Rgb([11, 12, 13]));
        assert_eq!(output.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(output.get_pixel(0, 1), &Rgb([0, 0, 0]));
        assert_eq!(output.get_pixel(1, 1), &Rgb([20, 20, 20]));
    }

    #[test]
    fn test_bitwise_and_any_nonzero_keeps_pixel() {
        let image = RgbImage::from_raw(3, 1, vec![5, 6, 7, 8, 9, 10, 11, 12, 13]).unwrap();
        let mask = ColorMask::new(3, 1, vec![1, 0, 200]).unwrap();

        let output = bitwise_and(&image, &mask).unwrap();

        assert_eq!(output.get_pixel(0, 0), &Rgb([5, 6, 7]));
        assert_eq!(output.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(output.get_pixel(2, 0), &Rgb([11, 12, 13]));
    }

    #[test]
    fn test_bitwise_and_size_mismatch() {
        let image = RgbImage::new(2, 2);
        let mask = ColorMask::new(1, 1, vec![255]).unwrap();

        assert_eq!(bitwise_and(&image, &mask), Err(GlimpseError::MaskSizeError));
    }
}
