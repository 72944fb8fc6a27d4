/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Vertical strip split into column subsections
//!
//! Unlike [`average_color_vertical`], bounds here are clamped into the image.
//! The clamped range `[start_x, end_x]` is split into `num_subsections`
//! subsections of `(end_x - start_x + 1) / num_subsections` columns (floor division),
//! every subsection bound is clamped back into `[start_x, end_x]`, and each
//! subsection is averaged across all rows.
//!
//! Clamping keeps every subsection non-empty: when the range is narrower than
//! the subsection count, or `start_x` lies past `end_x`, subsections collapse
//! onto the single column `start_x`.

use tint_core::image::Image;

use crate::average::average_color_vertical;
use crate::errors::RegionErrors;
use crate::sections::Sections;

/// Average colors of `num_subsections` column subsections of `[start_x, end_x]`,
/// left to right
///
/// `start_x` and `end_x` are clamped into `[0, width - 1]`. Asking for more
/// subsections than the image has columns fails with [`RegionErrors::EmptyRegion`],
/// like the line queries do.
pub fn average_colors_vertical_with_subsections(
    image: &Image, start_x: i64, end_x: i64, num_subsections: usize
) -> Sections {
    if num_subsections == 0 {
        return Sections::failed(RegionErrors::InvalidArgument(
            "num_subsections",
            num_subsections
        ));
    }
    if num_subsections > image.width() {
        return Sections::failed(RegionErrors::EmptyRegion(
            "more subsections than image columns"
        ));
    }
    let Ok(count) = i64::try_from(num_subsections) else {
        return Sections::failed(RegionErrors::InvalidArgument(
            "num_subsections",
            num_subsections
        ));
    };
    let last_column = i64::try_from(image.width()).unwrap_or(i64::MAX) - 1;

    let start_x = start_x.clamp(0, last_column);
    let end_x = end_x.clamp(0, last_column);

    let range_width = end_x - start_x + 1;
    // floor division, negative when start_x > end_x
    let subsection_width = range_width.div_euclid(count);

    let mut averages = Vec::with_capacity(num_subsections);

    for i in 0..count {
        let sub_start = start_x.saturating_add(i.saturating_mul(subsection_width));
        let sub_end = sub_start.saturating_add(subsection_width) - 1;

        // max(start, min(v, end)), start wins when start > end
        let sub_start = sub_start.min(end_x).max(start_x);
        let sub_end = sub_end.min(end_x).max(start_x);

        match average_color_vertical(image, sub_start as usize, sub_end as usize) {
            Ok(average) => averages.push(average),
            Err(err) => return Sections::failed(err)
        }
    }
    Sections::new(averages)
}
