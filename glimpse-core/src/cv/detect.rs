// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::slice::Iter;

use image::RgbImage;

use crate::cv::threshold::{ColorBoundary, bitwise_and, in_range};
use crate::error::GlimpseError;
use crate::im::{ColorMask, hstack};

/// The result of thresholding one image by one color boundary
#[derive(Debug, Clone)]
pub struct Detection {
    pub boundary: ColorBoundary,
    pub mask: ColorMask,
    pub output: RgbImage,
}

impl Detection {
    /// Source image and masked output side by side
    pub fn frame(&self, source: &RgbImage) -> Result<RgbImage, GlimpseError> {
        hstack(&[source, &self.output])
    }
}

/// A lazy iterator yielding one `Detection` per color boundary
///
/// Detections are computed on demand in boundary order. Creating a new
/// iterator over the same image and boundaries recomputes the same sequence.
///
/// # Examples
///
/// ```
/// use image::{Rgb, RgbImage};
/// use glimpse_core::cv::{default_boundaries, detect_colors};
///
/// let image = RgbImage::from_pixel(4, 4, Rgb([150, 30, 40]));
/// let boundaries = default_boundaries();
///
/// let counts: Vec<usize> = detect_colors(&image, &boundaries)
///     .map(|detection| detection.unwrap().mask.count())
///     .collect();
///
/// assert_eq!(counts, vec![16, 0, 0, 0]);
/// ```
pub struct ColorDetections<'a> {
    image: &'a RgbImage,
    boundaries: Iter<'a, ColorBoundary>,
}

pub fn detect_colors<'a>(
    image: &'a RgbImage,
    boundaries: &'a [ColorBoundary],
) -> ColorDetections<'a> {
    ColorDetections {
        image,
        boundaries: boundaries.iter(),
    }
}

impl Iterator for ColorDetections<'_> {
    type Item = Result<Detection, GlimpseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let boundary = self.boundaries.next()?;
        let mask = in_range(self.image, boundary);

        Some(bitwise_and(self.image, &mask).map(|output| Detection {
            boundary: *boundary,
            mask,
            output,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boundaries.size_hint()
    }
}

impl ExactSizeIterator for ColorDetections<'_> {}
