// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::slice::Chunks;

use image::{RgbImage, imageops};

use crate::constant;
use crate::cv::transform::resize_bilinear_fast;
use crate::error::GlimpseError;

/// Cell size and grid shape of a montage page
///
/// Images are resized to exactly `cell_width` x `cell_height` and placed
/// row-major into a grid of `columns` x `rows` cells. Cells without an
/// image are left black.
///
/// # Examples
///
/// ```
/// use image::RgbImage;
/// use glimpse_core::cv::MontageLayout;
///
/// let layout = MontageLayout::new(10, 20, 2, 2).unwrap();
/// let images = vec![RgbImage::new(5, 5); 5];
///
/// let pages: Vec<RgbImage> = layout.pages(&images).map(|p| p.unwrap()).collect();
///
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].dimensions(), (20, 40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontageLayout {
    cell_width: u32,
    cell_height: u32,
    columns: u32,
    rows: u32,
}

impl Default for MontageLayout {
    fn default() -> Self {
        MontageLayout {
            cell_width: constant::MONTAGE_CELL_WIDTH,
            cell_height: constant::MONTAGE_CELL_HEIGHT,
            columns: constant::MONTAGE_COLUMNS,
            rows: constant::MONTAGE_ROWS,
        }
    }
}

impl MontageLayout {
    /// Initialize a layout, rejecting any zero-sized dimension or a page
    /// whose pixel size does not fit in `u32`
    ///
    /// # Arguments
    ///
    /// * `cell_width` - Width of each cell in pixels
    /// * `cell_height` - Height of each cell in pixels
    /// * `columns` - Number of cells per row
    /// * `rows` - Number of rows per page
    pub fn new(
        cell_width: u32,
        cell_height: u32,
        columns: u32,
        rows: u32,
    ) -> Result<MontageLayout, GlimpseError> {
        if cell_width == 0 || cell_height == 0 || columns == 0 || rows == 0 {
            return Err(GlimpseError::MontageShapeError);
        }

        if columns.checked_mul(cell_width).is_none() || rows.checked_mul(cell_height).is_none() {
            return Err(GlimpseError::MontageShapeError);
        }

        Ok(MontageLayout {
            cell_width,
            cell_height,
            columns,
            rows,
        })
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn grid_shape(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Number of cells on a single page
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Width and height of a page in pixels
    pub fn page_size(&self) -> (u32, u32) {
        (self.columns * self.cell_width, self.rows * self.cell_height)
    }

    /// Number of pages needed to hold `n_images`
    pub fn page_count(&self, n_images: usize) -> usize {
        n_images.div_ceil(self.cells())
    }

    /// Pixel coordinates of the top-left corner of a cell
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let column = (index % self.columns as usize) as u32;
        let row = (index / self.columns as usize) as u32;
        (column * self.cell_width, row * self.cell_height)
    }

    /// Render a single page from at most `cells()` images
    ///
    /// Images beyond the capacity of one page are ignored.
    pub fn render(&self, images: &[RgbImage]) -> Result<RgbImage, GlimpseError> {
        let (width, height) = self.page_size();
        let mut page = RgbImage::new(width, height);

        for (index, image) in images.iter().take(self.cells()).enumerate() {
            let cell = resize_bilinear_fast(image, self.cell_width, self.cell_height)?;
            let (x, y) = self.cell_origin(index);
            imageops::replace(&mut page, &cell, x as i64, y as i64);
        }

        Ok(page)
    }

    /// A lazy iterator over every montage page for `images`
    pub fn pages<'a>(&self, images: &'a [RgbImage]) -> Montages<'a> {
        Montages {
            layout: *self,
            chunks: images.chunks(self.cells()),
        }
    }
}

/// Montage pages rendered on demand from consecutive chunks of images
pub struct Montages<'a> {
    layout: MontageLayout,
    chunks: Chunks<'a, RgbImage>,
}

impl Iterator for Montages<'_> {
    type Item = Result<RgbImage, GlimpseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(self.layout.render(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Montages<'_> {}
