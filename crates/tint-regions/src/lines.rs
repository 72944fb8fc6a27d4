/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Section averages along the edges of an image
//!
//! An edge line is split into `num_sections` sections of `len / num_sections`
//! pixels, pixels left over at the end of the line are not part of any section.
//!
//! Edges are named after grid rows, row `0` is the "top" line. For an image
//! decoded from a BMP file, row `0` is the bottom scanline of the displayed picture.
//!
//! ```text
//!          top line, row 0
//!   ┌───┬───┬───┬───┬─┐
//!   │ 0 │ 1 │ 2 │ 3 │ │ ┐ 0
//!   ├───┴───┴───┴───┴─┤ │
//!   │                 │ ┘ right line,
//!   │                 │ ┐ column width-1
//!   ├───┬───┬───┬───┬─┤ │ 1
//!   │ 0 │ 1 │ 2 │ 3 │ │ ┘
//!   └───┴───┴───┴───┴─┘
//!      bottom line, row height-1
//! ```

use tint_core::image::Image;
use tint_core::pixel::Pixel;

use crate::errors::RegionErrors;
use crate::sections::{partition, Sections};
use crate::sums::ChannelSums;

/// Averages of `num_sections` sections of row `0`, left to right
pub fn average_colors_top_line(image: &Image, num_sections: usize) -> Sections {
    match image.row(0) {
        Some(row) => average_line(row, num_sections),
        None => Sections::failed(RegionErrors::EmptyRegion("image has no rows"))
    }
}

/// Averages of `num_sections` sections of the last row, left to right
pub fn average_colors_bottom_line(image: &Image, num_sections: usize) -> Sections {
    match image.row(image.height().saturating_sub(1)) {
        Some(row) => average_line(row, num_sections),
        None => Sections::failed(RegionErrors::EmptyRegion("image has no rows"))
    }
}

/// Averages of `num_sections` sections of the last column, from row `0` down
pub fn average_colors_right_line(image: &Image, num_sections: usize) -> Sections {
    let last_column = image.width().saturating_sub(1);

    let column: Vec<Pixel> = image
        .rows()
        .filter_map(|row| row.get(last_column).copied())
        .collect();

    average_line(&column, num_sections)
}

fn average_line(line: &[Pixel], num_sections: usize) -> Sections {
    let ranges = match partition(line.len(), num_sections) {
        Ok(ranges) => ranges,
        Err(err) => return Sections::failed(err)
    };
    let mut averages = Vec::with_capacity(num_sections);

    for range in ranges {
        let sums: ChannelSums = line[range].iter().copied().collect();

        match sums.average() {
            Some(average) => averages.push(average),
            None => return Sections::failed(RegionErrors::EmptyRegion("empty line section"))
        }
    }
    Sections::new(averages)
}

#[cfg(test)]
mod tests {
    use tint_core::image::Image;
    use tint_core::pixel::Pixel;

    use crate::{
        average_colors_bottom_line, average_colors_right_line, average_colors_top_line,
        RegionErrors
    };

    /// Single row image, pixel x has every channel set to x
    fn ramp(width: usize) -> Image {
        Image::from_fn(width, 1, |x, _| Pixel::new(x as u8, x as u8, x as u8)).unwrap()
    }

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn top_line_of_twelve_in_four() {
        let sections = average_colors_top_line(&ramp(12), 4);

        // means of (0,1,2) (3,4,5) (6,7,8) (9,10,11)
        assert_eq!(sections.averages(), &[gray(1), gray(4), gray(7), gray(10)]);
        assert!(sections.error().is_none());
    }

    #[test]
    fn thirteenth_column_is_excluded() {
        let mut image = ramp(13).pixels().to_vec();
        // make the last column stand out, it should not matter
        image[12] = gray(255);
        let image = Image::new(13, 1, image).unwrap();

        let sections = average_colors_top_line(&image, 4);
        assert_eq!(sections.averages(), &[gray(1), gray(4), gray(7), gray(10)]);
    }

    #[test]
    fn zero_sections_is_empty_with_error() {
        let image = ramp(12);

        for sections in [
            average_colors_top_line(&image, 0),
            average_colors_bottom_line(&image, 0),
            average_colors_right_line(&image, 0)
        ] {
            assert!(sections.is_empty());
            assert_eq!(
                sections.error(),
                Some(&RegionErrors::InvalidArgument("num_sections", 0))
            );
        }
    }

    #[test]
    fn more_sections_than_pixels_is_empty_with_error() {
        let sections = average_colors_top_line(&ramp(3), 4);

        assert!(sections.is_empty());
        assert!(matches!(sections.error(), Some(RegionErrors::EmptyRegion(_))));
    }

    #[test]
    fn bottom_line_uses_last_row() {
        // row y has every channel set to y
        let image = Image::from_fn(4, 3, |_, y| gray(y as u8 * 100)).unwrap();

        assert_eq!(average_colors_top_line(&image, 2).averages(), &[gray(0), gray(0)]);
        assert_eq!(
            average_colors_bottom_line(&image, 2).averages(),
            &[gray(200), gray(200)]
        );
    }

    #[test]
    fn right_line_walks_last_column_from_row_zero() {
        // last column holds the row index, other columns are noise
        let image = Image::from_fn(3, 6, |x, y| {
            if x == 2 {
                gray(y as u8)
            } else {
                gray(250)
            }
        })
        .unwrap();

        let sections = average_colors_right_line(&image, 3);
        // (0,1) (2,3) (4,5)
        assert_eq!(sections.averages(), &[gray(0), gray(2), gray(4)]);
    }
}
