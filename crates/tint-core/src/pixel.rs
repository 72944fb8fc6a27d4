/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel

use core::fmt::{Display, Formatter};

/// An RGB pixel with eight bits per channel
///
/// Pixels are plain values, they are copied around and never
/// change after construction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    red:   u8,
    green: u8,
    blue:  u8
}

impl Pixel {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Pixel {
        Pixel { red, green, blue }
    }
    /// Create a pixel from a `[blue, green, red]` triplet, the order
    /// BMP stores pixels in
    #[must_use]
    pub const fn from_bgr([blue, green, red]: [u8; 3]) -> Pixel {
        Pixel { red, green, blue }
    }
    pub const fn red(&self) -> u8 {
        self.red
    }
    pub const fn green(&self) -> u8 {
        self.green
    }
    pub const fn blue(&self) -> u8 {
        self.blue
    }
    /// Return channels in `[red, green, blue]` order
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Pixel { red, green, blue }
    }
}

impl Display for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "R={}, G={}, B={}", self.red, self.green, self.blue)
    }
}
