use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tint_regions::Sections;

use crate::report::Report;

/// Report of a single file, ready for `serde_json`
pub struct FileReport<'a> {
    file:   OsString,
    report: &'a Report
}

impl<'a> FileReport<'a> {
    pub fn new(file: OsString, report: &'a Report) -> FileReport<'a> {
        FileReport { file, report }
    }
}

impl Serialize for FileReport<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FileReport", 2)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("report", &self.report)?;

        state.end()
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Report", 10)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("average", &self.average)?;
        state.serialize_field("vertical_parts", &self.vertical_parts)?;
        state.serialize_field("horizontal_parts", &self.horizontal_parts)?;
        state.serialize_field("top_line", &SerializableSections(&self.top_line))?;
        state.serialize_field("right_line", &SerializableSections(&self.right_line))?;
        state.serialize_field("bottom_line", &SerializableSections(&self.bottom_line))?;
        state.serialize_field("left_line", &SerializableSections(&self.left_line))?;

        state.end()
    }
}

/// Section averages, plus the error message when the query failed
struct SerializableSections<'a>(&'a Sections);

impl Serialize for SerializableSections<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Sections", 2)?;

        state.serialize_field("averages", self.0.averages())?;
        state.serialize_field("error", &self.0.error().map(|err| err.to_string()))?;

        state.end()
    }
}

/// Header information printed by `--probe`
pub struct ProbeMetadata {
    pub file:           OsString,
    pub file_size:      u64,
    pub width:          usize,
    pub height:         usize,
    pub bits_per_pixel: u16
}

impl Serialize for ProbeMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeMetadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bits_per_pixel", &self.bits_per_pixel)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tint_core::image::Image;
    use tint_core::pixel::Pixel;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::report::Report;
    use crate::serde::FileReport;

    #[test]
    fn report_serializes_sections_and_errors() {
        let image = Image::fill(Pixel::new(1, 2, 3), 2, 2).unwrap();
        let mut options = CmdOptions::new(PathBuf::from("small.bmp"));
        options.sections = 1;
        options.divisions = 5;

        let report = Report::new(&image, &options).unwrap();
        let value = serde_json::to_value(FileReport::new("small.bmp".into(), &report)).unwrap();

        assert_eq!(value["file"], "small.bmp");
        assert_eq!(value["report"]["width"], 2);
        assert_eq!(value["report"]["average"]["green"], 2);
        assert_eq!(value["report"]["vertical_parts"].as_array().unwrap().len(), 0);
        assert_eq!(value["report"]["top_line"]["averages"][0]["blue"], 3);
        assert!(value["report"]["top_line"]["error"].is_null());
    }

    #[test]
    fn failed_sections_carry_a_single_line_error() {
        let image = Image::fill(Pixel::new(1, 2, 3), 2, 2).unwrap();
        let mut options = CmdOptions::new(PathBuf::from("small.bmp"));
        options.sections = 5;

        let report = Report::new(&image, &options).unwrap();
        let value = serde_json::to_value(FileReport::new("small.bmp".into(), &report)).unwrap();

        let error = value["report"]["top_line"]["error"].as_str().unwrap();
        assert!(error.starts_with("Cannot average an empty region"));
        assert!(!error.ends_with('\n'));
        assert_eq!(value["report"]["top_line"]["averages"].as_array().unwrap().len(), 0);
    }
}
