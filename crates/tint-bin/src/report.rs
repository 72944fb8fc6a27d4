/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Region report printed by the command line
use std::io::Write;

use log::{debug, warn};
use tint_core::image::Image;
use tint_core::pixel::Pixel;
use tint_regions::{
    average_color, average_color_horizontal, average_color_vertical,
    average_colors_bottom_line, average_colors_right_line, average_colors_top_line,
    average_colors_vertical_with_subsections, RegionErrors, Sections
};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;

/// Averages of every region the command line reports on
pub struct Report {
    pub width:            usize,
    pub height:           usize,
    pub rows:             usize,
    pub average:          Pixel,
    pub vertical_parts:   Vec<Pixel>,
    pub horizontal_parts: Vec<Pixel>,
    pub top_line:         Sections,
    pub right_line:       Sections,
    pub bottom_line:      Sections,
    pub left_line:        Sections
}

/// Split `len` into `divisions` parts of `len / divisions` and
/// average each one, leftovers past the last part are not counted
fn average_parts<F>(
    len: usize, divisions: usize, axis: &str, mut average: F
) -> Result<Vec<Pixel>, CmdErrors>
where
    F: FnMut(usize, usize) -> Result<Pixel, RegionErrors>
{
    let step = len / divisions;

    if step == 0 {
        warn!("Cannot split {len} {axis} into {divisions} parts, skipping");
        return Ok(Vec::new());
    }
    let mut parts = Vec::with_capacity(divisions);

    for i in 0..divisions {
        let start = i * step;
        let end = start + step - 1;

        debug!("{axis} part {}: {start}..={end}", i + 1);
        parts.push(average(start, end)?);
    }
    Ok(parts)
}

impl Report {
    pub fn new(image: &Image, options: &CmdOptions) -> Result<Report, CmdErrors> {
        let (width, height) = image.dimensions();

        let average = average_color(image)?;

        let vertical_parts = average_parts(width, options.divisions, "columns", |start, end| {
            average_color_vertical(image, start, end)
        })?;
        let horizontal_parts = average_parts(height, options.divisions, "rows", |start, end| {
            average_color_horizontal(image, start, end)
        })?;

        let top_line = average_colors_top_line(image, options.sections);
        let right_line = average_colors_right_line(image, options.sections);
        let bottom_line = average_colors_bottom_line(image, options.sections);

        let end_x = options
            .subsection_end
            .unwrap_or_else(|| i64::try_from(width / 10).unwrap_or(i64::MAX));

        let left_line = average_colors_vertical_with_subsections(
            image,
            options.subsection_start,
            end_x,
            options.sections
        );

        Ok(Report {
            width,
            height,
            rows: image.rows().len(),
            average,
            vertical_parts,
            horizontal_parts,
            top_line,
            right_line,
            bottom_line,
            left_line
        })
    }

    /// Write the report as plain text
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Image Width: {}", self.width)?;
        writeln!(out, "Image Height: {}", self.height)?;
        writeln!(out, "Number of rows: {}", self.rows)?;
        writeln!(out, "Average Color: {}", self.average)?;

        for (i, part) in self.vertical_parts.iter().enumerate() {
            writeln!(out, "Average Color of Vertical Part {}: {}", i + 1, part)?;
        }
        for (i, part) in self.horizontal_parts.iter().enumerate() {
            writeln!(out, "Average color of Horizontal Part {}: {}", i + 1, part)?;
        }

        let lines = [
            ("Top Horizontal Line", &self.top_line),
            ("Right Vertical Line", &self.right_line),
            ("Bottom Horizontal Line", &self.bottom_line),
            ("Left Vertical Line", &self.left_line)
        ];
        for (name, sections) in lines {
            writeln!(out, "{name}:")?;

            for pixel in sections {
                writeln!(out, "{pixel}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tint_core::image::Image;
    use tint_core::pixel::Pixel;
    use tint_regions::RegionErrors;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::report::Report;

    fn gradient(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |x, y| Pixel::new(x as u8, y as u8, 7)).unwrap()
    }

    #[test]
    fn report_splits_into_divisions() {
        let image = gradient(7, 6);
        let mut options = CmdOptions::new(PathBuf::from("gradient.bmp"));
        options.sections = 2;

        let report = Report::new(&image, &options).unwrap();

        assert_eq!((report.width, report.height, report.rows), (7, 6, 6));
        // 7 / 3 = 2 wide parts, the last column is left out
        assert_eq!(
            report.vertical_parts,
            [Pixel::new(0, 2, 7), Pixel::new(2, 2, 7), Pixel::new(4, 2, 7)]
        );
        assert_eq!(
            report.horizontal_parts,
            [Pixel::new(3, 0, 7), Pixel::new(3, 2, 7), Pixel::new(3, 4, 7)]
        );
        assert_eq!(report.top_line.averages(), [Pixel::new(1, 0, 7), Pixel::new(4, 0, 7)]);
        assert_eq!(report.right_line.averages(), [Pixel::new(6, 1, 7), Pixel::new(6, 4, 7)]);
    }

    #[test]
    fn left_line_defaults_to_tenth_of_width() {
        let image = gradient(40, 2);
        let mut options = CmdOptions::new(PathBuf::from("gradient.bmp"));
        options.sections = 1;

        let report = Report::new(&image, &options).unwrap();
        // start 28 and end 4 collapse to column 28
        assert_eq!(report.left_line.averages(), [Pixel::new(28, 0, 7)]);

        options.subsection_start = 0;
        options.subsection_end = None;
        let report = Report::new(&image, &options).unwrap();
        // columns 0..=4
        assert_eq!(report.left_line.averages(), [Pixel::new(2, 0, 7)]);
    }

    #[test]
    fn narrow_images_skip_parts_and_keep_errors() {
        let image = gradient(2, 2);
        let options = CmdOptions::new(PathBuf::from("tiny.bmp"));

        let report = Report::new(&image, &options).unwrap();

        assert!(report.vertical_parts.is_empty());
        assert!(report.horizontal_parts.is_empty());
        assert!(report.top_line.is_empty());
        assert!(matches!(
            report.top_line.error(),
            Some(RegionErrors::EmptyRegion(_))
        ));
    }

    #[test]
    fn text_report_matches_layout() {
        let image = Image::fill(Pixel::new(10, 20, 30), 3, 3).unwrap();
        let mut options = CmdOptions::new(PathBuf::from("flat.bmp"));
        options.sections = 1;
        options.subsection_start = 0;

        let report = Report::new(&image, &options).unwrap();

        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
Image Width: 3
Image Height: 3
Number of rows: 3
Average Color: R=10, G=20, B=30
Average Color of Vertical Part 1: R=10, G=20, B=30
Average Color of Vertical Part 2: R=10, G=20, B=30
Average Color of Vertical Part 3: R=10, G=20, B=30
Average color of Horizontal Part 1: R=10, G=20, B=30
Average color of Horizontal Part 2: R=10, G=20, B=30
Average color of Horizontal Part 3: R=10, G=20, B=30
Top Horizontal Line:
R=10, G=20, B=30
Right Vertical Line:
R=10, G=20, B=30
Bottom Horizontal Line:
R=10, G=20, B=30
Left Vertical Line:
R=10, G=20, B=30
";
        assert_eq!(text, expected);
    }
}
