/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A small BMP decoder
//!
//! This crate decodes BMP images into an [`Image`](tint_core::image::Image)
//! grid of RGB pixels
//!
//! # Supported formats
//! - 24 bits per pixel, uncompressed (`BI_RGB`) images with the
//!   standard 54 byte header (`BITMAPFILEHEADER` + `BITMAPINFOHEADER`)
//!
//! # Unsupported formats
//! - RLE and bitfield compression
//! - Paletted images and any bit depth other than 24
//! - Top-down images (negative height)
//!
//! # Row order
//! Rows are stored in the decoded image in the order they appear in the file,
//! so row `0` is the bottom scanline of the displayed picture.
//! See [`tint_core::image`] for details.
//!
//! # Example
//! ```no_run
//! use tint_core::options::DecoderOptions;
//!
//! fn main() -> Result<(), tint_bmp::BmpDecoderErrors> {
//!     let image = tint_bmp::decode_file("Raw_Blue.bmp", DecoderOptions::default())?;
//!     println!("{}x{}", image.width(), image.height());
//!     Ok(())
//! }
//! ```

pub use crate::decoder::{decode_file, probe_bmp, BmpDecoder};
pub use crate::errors::BmpDecoderErrors;

mod common;
mod decoder;
mod errors;
