/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tint_core::pixel::Pixel;

/// Running per-channel sums of a set of pixels
///
/// Sums are kept in `u64`, which cannot overflow for any image
/// whose pixel count fits in memory.
///
/// ```
/// use tint_core::pixel::Pixel;
/// use tint_regions::ChannelSums;
///
/// let sums: ChannelSums = [Pixel::new(0, 0, 0), Pixel::new(1, 3, 255)].into_iter().collect();
///
/// assert_eq!(sums.average(), Some(Pixel::new(0, 1, 127)));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ChannelSums {
    red:   u64,
    green: u64,
    blue:  u64,
    count: u64
}

impl ChannelSums {
    #[must_use]
    pub fn new() -> ChannelSums {
        ChannelSums::default()
    }

    #[inline]
    pub fn add(&mut self, pixel: Pixel) {
        self.red += u64::from(pixel.red());
        self.green += u64::from(pixel.green());
        self.blue += u64::from(pixel.blue());
        self.count += 1;
    }
    /// Number of pixels added so far
    pub const fn count(&self) -> u64 {
        self.count
    }
    /// Truncating average of every channel or `None` if no pixel was added
    pub fn average(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        // each quotient is at most 255
        Some(Pixel::new(
            (self.red / self.count) as u8,
            (self.green / self.count) as u8,
            (self.blue / self.count) as u8
        ))
    }
}

impl Extend<Pixel> for ChannelSums {
    fn extend<I: IntoIterator<Item = Pixel>>(&mut self, iter: I) {
        iter.into_iter().for_each(|pixel| self.add(pixel));
    }
}

impl<'a> Extend<&'a Pixel> for ChannelSums {
    fn extend<I: IntoIterator<Item = &'a Pixel>>(&mut self, iter: I) {
        iter.into_iter().for_each(|pixel| self.add(*pixel));
    }
}

impl FromIterator<Pixel> for ChannelSums {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        let mut sums = ChannelSums::new();
        sums.extend(iter);
        sums
    }
}

#[cfg(test)]
mod tests {
    use tint_core::pixel::Pixel;

    use crate::ChannelSums;

    #[test]
    fn empty_has_no_average() {
        assert_eq!(ChannelSums::new().average(), None);
    }

    #[test]
    fn average_truncates() {
        let sums: ChannelSums = [Pixel::new(1, 2, 3), Pixel::new(2, 2, 2), Pixel::new(2, 2, 2)]
            .into_iter()
            .collect();

        // 5/3, 6/3, 7/3
        assert_eq!(sums.average(), Some(Pixel::new(1, 2, 2)));
        assert_eq!(sums.count(), 3);
    }

    #[test]
    fn large_sums_do_not_overflow() {
        let mut sums = ChannelSums::new();
        sums.extend(std::iter::repeat(Pixel::new(255, 255, 255)).take(1 << 20));

        assert_eq!(sums.average(), Some(Pixel::new(255, 255, 255)));
    }
}
