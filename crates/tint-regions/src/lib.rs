/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Region average routines for tint images
//!
//! Every routine is a pure function of an [`Image`](tint_core::image::Image),
//! averages are computed by summing each channel over the selected pixels
//! and dividing by the pixel count, truncating the result.
//!
//! There are two families of queries with different error handling
//!
//! - Range queries ([`average_color`], [`average_color_vertical`], [`average_color_horizontal`])
//!   return a `Result`, out of range indices are an error and are never clamped.
//! - Section queries (the `average_colors_*` functions) always return [`Sections`].
//!   An invalid section count is logged and produces an empty result carrying the error.
//!
//! # Example
//! ```
//! use tint_core::image::Image;
//! use tint_core::pixel::Pixel;
//! use tint_regions::{average_color, average_colors_top_line};
//!
//! let image = Image::fill(Pixel::new(10, 20, 30), 12, 4).unwrap();
//!
//! assert_eq!(average_color(&image).unwrap(), Pixel::new(10, 20, 30));
//! assert_eq!(average_colors_top_line(&image, 4).len(), 4);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

pub use crate::average::{average_color, average_color_horizontal, average_color_vertical};
pub use crate::errors::RegionErrors;
pub use crate::lines::{
    average_colors_bottom_line, average_colors_right_line, average_colors_top_line
};
pub use crate::sections::Sections;
pub use crate::subsections::average_colors_vertical_with_subsections;
pub use crate::sums::ChannelSums;

mod average;
mod errors;
mod lines;
mod sections;
mod subsections;
mod sums;
