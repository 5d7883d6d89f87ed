// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

//! Core image operations for glimpse: color-range masks and image montages.

pub mod constant;
pub mod cv;
pub mod error;
pub mod im;
pub mod ut;
