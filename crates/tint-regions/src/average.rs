/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Average color over the whole image and over vertical or horizontal strips
//!
//! ```text
//!   start_x   end_x
//!   ┌──┬───────┬───────┐        ┌───────────────────┐
//!   │  │███████│       │        │                   │
//!   │  │███████│       │ start_y├───────────────────┤
//!   │  │███████│       │        │███████████████████│
//!   │  │███████│       │   end_y├───────────────────┤
//!   └──┴───────┴───────┘        └───────────────────┘
//!      vertical strip              horizontal strip
//! ```
//! Both bounds are inclusive. Bounds are checked, an index past the image
//! fails with [`RegionErrors::IndexOutOfRange`] instead of being clamped.

use tint_core::image::Image;
use tint_core::pixel::Pixel;

use crate::errors::RegionErrors;
use crate::sums::ChannelSums;

/// Average color of every pixel in the image
///
/// # Errors
/// [`RegionErrors::EmptyRegion`] if the image has no pixels, which a
/// successfully constructed [`Image`] never has
pub fn average_color(image: &Image) -> Result<Pixel, RegionErrors> {
    let sums: ChannelSums = image.pixels().iter().copied().collect();

    sums.average()
        .ok_or(RegionErrors::EmptyRegion("image has no pixels"))
}

/// Average color of columns `start_x..=end_x` across every row
///
/// # Errors
/// - [`RegionErrors::IndexOutOfRange`] if `start_x` or `end_x` is not below the image width
/// - [`RegionErrors::EmptyRegion`] if `start_x > end_x`
pub fn average_color_vertical(
    image: &Image, start_x: usize, end_x: usize
) -> Result<Pixel, RegionErrors> {
    check_range("column", start_x, end_x, image.width())?;

    let mut sums = ChannelSums::new();

    for row in image.rows() {
        sums.extend(&row[start_x..=end_x]);
    }
    sums.average()
        .ok_or(RegionErrors::EmptyRegion("vertical strip has no pixels"))
}

/// Average color of rows `start_y..=end_y` across every column
///
/// # Errors
/// - [`RegionErrors::IndexOutOfRange`] if `start_y` or `end_y` is not below the image height
/// - [`RegionErrors::EmptyRegion`] if `start_y > end_y`
pub fn average_color_horizontal(
    image: &Image, start_y: usize, end_y: usize
) -> Result<Pixel, RegionErrors> {
    check_range("row", start_y, end_y, image.height())?;

    let mut sums = ChannelSums::new();

    for row in image.rows().skip(start_y).take(end_y - start_y + 1) {
        sums.extend(row);
    }
    sums.average()
        .ok_or(RegionErrors::EmptyRegion("horizontal strip has no pixels"))
}

fn check_range(
    axis: &'static str, start: usize, end: usize, len: usize
) -> Result<(), RegionErrors> {
    if start >= len {
        return Err(RegionErrors::IndexOutOfRange(axis, start, len));
    }
    if end >= len {
        return Err(RegionErrors::IndexOutOfRange(axis, end, len));
    }
    if start > end {
        return Err(RegionErrors::EmptyRegion("range starts after it ends"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tint_core::image::Image;
    use tint_core::pixel::Pixel;

    use crate::{average_color, average_color_horizontal, average_color_vertical, RegionErrors};

    /// 4x3 image whose red channel is the column and green the row
    fn coordinates() -> Image {
        Image::from_fn(4, 3, |x, y| Pixel::new(x as u8 * 10, y as u8 * 10, 7)).unwrap()
    }

    #[test]
    fn uniform_image_averages_to_its_color() {
        for (w, h) in [(1, 1), (3, 7), (64, 5)] {
            let image = Image::fill(Pixel::new(10, 20, 30), w, h).unwrap();
            assert_eq!(average_color(&image).unwrap(), Pixel::new(10, 20, 30));
        }
    }

    #[test]
    fn vertical_strip() {
        let image = coordinates();
        // columns 1 and 2 -> red (10+20)/2, green (0+10+20)/3
        assert_eq!(
            average_color_vertical(&image, 1, 2).unwrap(),
            Pixel::new(15, 10, 7)
        );
        assert_eq!(
            average_color_vertical(&image, 3, 3).unwrap(),
            Pixel::new(30, 10, 7)
        );
    }

    #[test]
    fn horizontal_strip() {
        let image = coordinates();
        // rows 1 and 2 -> red (0+10+20+30)/4, green (10+20)/2
        assert_eq!(
            average_color_horizontal(&image, 1, 2).unwrap(),
            Pixel::new(15, 15, 7)
        );
        assert_eq!(
            average_color_horizontal(&image, 0, 0).unwrap(),
            Pixel::new(15, 0, 7)
        );
    }

    #[test]
    fn out_of_range_indices_fail() {
        let image = coordinates();

        assert_eq!(
            average_color_vertical(&image, 0, 4),
            Err(RegionErrors::IndexOutOfRange("column", 4, 4))
        );
        assert_eq!(
            average_color_horizontal(&image, 3, 3),
            Err(RegionErrors::IndexOutOfRange("row", 3, 3))
        );
    }

    #[test]
    fn reversed_range_is_empty() {
        let image = coordinates();

        assert!(matches!(
            average_color_vertical(&image, 2, 1),
            Err(RegionErrors::EmptyRegion(_))
        ));
    }
}
