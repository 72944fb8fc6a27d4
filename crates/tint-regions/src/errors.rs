/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when averaging a region
#[derive(Clone, Eq, PartialEq)]
pub enum RegionErrors {
    /// A section count was not usable, argument name and value
    InvalidArgument(&'static str, usize),
    /// An index was outside the image,
    /// axis, index, length of that axis
    IndexOutOfRange(&'static str, usize, usize),
    /// The selection contains no pixels
    EmptyRegion(&'static str)
}

impl Debug for RegionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(name, value) => {
                write!(f, "Invalid argument {name}={value}, it must be greater than zero")
            }
            Self::IndexOutOfRange(axis, index, len) => {
                write!(f, "{axis} index {index} out of range for length {len}")
            }
            Self::EmptyRegion(region) => {
                write!(f, "Cannot average an empty region: {region}")
            }
        }
    }
}

impl Display for RegionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RegionErrors {}

#[cfg(test)]
mod tests {
    use crate::RegionErrors;

    #[test]
    fn messages_are_single_line() {
        let errors = [
            RegionErrors::InvalidArgument("num_sections", 0),
            RegionErrors::IndexOutOfRange("column", 4, 4),
            RegionErrors::EmptyRegion("image has no pixels")
        ];
        for err in errors {
            let message = err.to_string();
            assert!(!message.contains('\n'), "{message:?}");
        }
        assert_eq!(
            RegionErrors::IndexOutOfRange("row", 9, 3).to_string(),
            "row index 9 out of range for length 3"
        );
    }
}
