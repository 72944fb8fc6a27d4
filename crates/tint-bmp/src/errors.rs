/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use tint_core::bytestream::ZByteIoError;
use tint_core::image::ImageErrors;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The source could not be opened, or it ended
    /// before the header or pixel data was complete
    IoErrors(ZByteIoError),
    /// The file uses a feature this decoder does not support,
    /// the message names the attribute
    UnsupportedFormat(String),
    /// The file/bytes do not start with `BM`
    ///
    /// Only reported in strict mode
    InvalidMagicBytes,
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    /// The decoded pixels could not form an image
    ImageErrors(ImageErrors)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
            Self::UnsupportedFormat(message) => {
                writeln!(f, "Unsupported BMP format: {}", message)
            }
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::ImageErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ZByteIoError> for BmpDecoderErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

impl From<std::io::Error> for BmpDecoderErrors {
    fn from(value: std::io::Error) -> Self {
        BmpDecoderErrors::IoErrors(ZByteIoError::from(value))
    }
}

impl From<ImageErrors> for BmpDecoderErrors {
    fn from(value: ImageErrors) -> Self {
        BmpDecoderErrors::ImageErrors(value)
    }
}
