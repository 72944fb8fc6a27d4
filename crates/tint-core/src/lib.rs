/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all tint libraries
//!
//! This crate provides a set of core routines shared
//! by the BMP decoder and the region averaging routines
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads
//! - The [`Pixel`](crate::pixel::Pixel) and [`Image`](crate::image::Image) types
//! - Decoder options
//! - A logging facade which compiles to nothing unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward log messages to the [`log`](https://docs.rs/log) crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod image;
pub mod log;
pub mod options;
pub mod pixel;
pub mod serde;
