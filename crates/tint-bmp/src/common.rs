/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed layout of the 54 byte BMP header
//!
//! ```text
//! offset  size  field
//!  0      2     magic, "BM"
//!  2      4     file size
//!  6      4     reserved
//! 10      4     pixel data offset
//! 14      4     info header size
//! 18      4     width  (signed)
//! 22      4     height (signed)
//! 26      2     planes
//! 28      2     bits per pixel
//! 30      4     compression
//! 34     20     image size, resolution, palette counts
//! ```

/// Size of `BITMAPFILEHEADER` + `BITMAPINFOHEADER`
pub(crate) const HEADER_SIZE: usize = 54;

pub(crate) const DATA_OFFSET: usize = 10;
pub(crate) const INFO_HEADER_SIZE: usize = 14;
pub(crate) const WIDTH_OFFSET: usize = 18;
pub(crate) const HEIGHT_OFFSET: usize = 22;
pub(crate) const PLANES_OFFSET: usize = 26;
pub(crate) const DEPTH_OFFSET: usize = 28;
pub(crate) const COMPRESSION_OFFSET: usize = 30;

/// Pixel bytes read at a time, a whole number of pixels
pub(crate) const SCANLINE_CHUNK: usize = 3 * 4096;

/// The only supported depth
pub(crate) const SUPPORTED_DEPTH: u16 = 24;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    Unknown(u32)
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> BmpCompression {
        match num {
            0 => BmpCompression::RGB,
            1 => BmpCompression::RLE8,
            2 => BmpCompression::RLE4,
            3 => BmpCompression::BITFIELDS,
            n => BmpCompression::Unknown(n)
        }
    }
}

/// Number of padding bytes after each scanline of `width` 24 bit pixels,
/// rows are rounded up to a multiple of 4 bytes
pub(crate) const fn row_padding(width: usize) -> usize {
    (4 - (width.wrapping_mul(3)) % 4) % 4
}

#[cfg(test)]
mod tests {
    use crate::common::{row_padding, BmpCompression};

    #[test]
    fn padding_rounds_rows_to_four_bytes() {
        assert_eq!(row_padding(1), 1);
        assert_eq!(row_padding(2), 2);
        assert_eq!(row_padding(3), 3);
        assert_eq!(row_padding(4), 0);
        assert_eq!(row_padding(5), 1);
    }

    #[test]
    fn unknown_compression_keeps_value() {
        assert_eq!(BmpCompression::from_u32(0), BmpCompression::RGB);
        assert_eq!(BmpCompression::from_u32(9), BmpCompression::Unknown(9));
    }
}
