/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The decoded image representation
//!
//! An [`Image`] owns a row-major grid of [`Pixel`]s.
//!
//! # Row order
//!
//! Rows are kept in the order the BMP decoder reads them. BMP files store
//! scanlines bottom to top, so row `0` of an image is the **bottom** scanline
//! of the picture as it is displayed, and row `height - 1` is the top one.
//!
//! ```text
//!   displayed image        grid
//!   ┌───────────────┐
//!   │ top scanline  │ ->   row height-1
//!   │      ...      │      ...
//!   │ bottom line   │ ->   row 0
//!   └───────────────┘
//! ```
//! Region queries (top line, bottom line, horizontal parts) are defined
//! against grid rows, not against the displayed orientation.

use core::fmt::{Debug, Display, Formatter};

use crate::pixel::Pixel;

/// Errors that can occur when constructing an image
pub enum ImageErrors {
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// The number of pixels does not match `width*height`,
    /// expected, found
    DimensionsMismatch(usize, usize),
    /// `width*height` overflowed
    OverFlowOccurred
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions cannot be zero, found {width}x{height}")
            }
            Self::DimensionsMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel count mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred when computing image size")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

/// A fully populated RGB image
///
/// The grid always holds exactly `width*height` pixels, and width and height
/// are never zero. An image cannot be modified after construction, so it
/// can be shared between threads by reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Image {
    /// Create an image from a row-major pixel buffer
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if either dimension is zero
    /// - [`ImageErrors::DimensionsMismatch`] if `pixels.len() != width*height`
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Image, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::ZeroDimensions(width, height));
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ImageErrors::OverFlowOccurred)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMismatch(expected, pixels.len()));
        }
        Ok(Image {
            width,
            height,
            pixels
        })
    }
    /// Create an image where every pixel is `pixel`
    ///
    /// # Errors
    /// Same as [`Image::new`]
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let size = width
            .checked_mul(height)
            .ok_or(ImageErrors::OverFlowOccurred)?;

        Image::new(width, height, vec![pixel; size])
    }
    /// Create an image from a function called for every `(x, y)` pair
    ///
    /// # Errors
    /// Same as [`Image::new`]
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Image::new(width, height, pixels)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
    /// Return row `y` or `None` if `y >= height`
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        let start = y.checked_mul(self.width)?;
        self.pixels.get(start..start.checked_add(self.width)?)
    }
    /// Iterate over rows, starting from row 0
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width)
    }
    /// Return the pixel at `(x, y)` or `None` if it is out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x])
    }
}
