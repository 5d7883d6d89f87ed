// Copyright (c) 2025, Tom Ouellette
// Licensed under the MIT License

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlimpseError {
    BufferSizeError,
    DirError(String),
    ImageExtensionError,
    ImageReadError(String),
    ImageWriteError(String),
    MaskSizeError,
    MontageShapeError,
    NoFileError(String),
    OtherError(String),
}

impl fmt::Display for GlimpseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GlimpseError::BufferSizeError => {
                write!(
                    f,
                    "[glimpse::BufferSizeError] The buffer does not match provided size."
                )
            }
            GlimpseError::DirError(message) => {
                write!(
                    f,
                    "[glimpse::DirError] Directory could not be read or created: {}",
                    message
                )
            }
            GlimpseError::ImageExtensionError => {
                write!(
                    f,
                    "[glimpse::ImageExtensionError] Could not detect a valid image extension for input."
                )
            }
            GlimpseError::ImageReadError(message) => {
                write!(
                    f,
                    "[glimpse::ImageReadError] Failed to decode image. {}",
                    message
                )
            }
            GlimpseError::ImageWriteError(message) => {
                write!(
                    f,
                    "[glimpse::ImageWriteError] Failed to write image. {}",
                    message
                )
            }
            GlimpseError::MaskSizeError => {
                write!(
                    f,
                    "[glimpse::MaskSizeError] Mask and image must have the same width and height."
                )
            }
            GlimpseError::MontageShapeError => {
                write!(
                    f,
                    "[glimpse::MontageShapeError] Montage cell size and grid shape must be non-zero."
                )
            }
            GlimpseError::NoFileError(path) => {
                write!(f, "[glimpse::NoFileError] File does not exist: {}", path)
            }
            GlimpseError::OtherError(message) => {
                write!(f, "[glimpse::OtherError] {}", message)
            }
        }
    }
}

impl std::error::Error for GlimpseError {}
