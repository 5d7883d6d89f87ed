// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

mod detect;
mod montage;
mod threshold;

pub mod transform;

pub use detect::ColorDetections;
pub use detect::Detection;
pub use detect::detect_colors;

pub use montage::MontageLayout;
pub use montage::Montages;

pub use threshold::ColorBoundary;
pub use threshold::bitwise_and;
pub use threshold::default_boundaries;
pub use threshold::in_range;
