use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("tint")
        .about("Report average colors of regions of a 24-bit BMP image")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .help("Input BMP file to read data from")
            .long("input")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image headers without decoding pixels"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the report as JSON"))
        .arg(Arg::new("divisions")
            .long("divisions")
            .help_heading("REGIONS")
            .help("Number of vertical and horizontal parts")
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
            .default_value("3"))
        .arg(Arg::new("sections")
            .long("sections")
            .help_heading("REGIONS")
            .help("Number of sections for the edge lines and the subsection strip")
            .value_parser(value_parser!(usize))
            .default_value("12"))
        .arg(Arg::new("subsection-start")
            .long("subsection-start")
            .help_heading("REGIONS")
            .help("First column of the subsection strip, clamped into the image")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .default_value("28"))
        .arg(Arg::new("subsection-end")
            .long("subsection-end")
            .help_heading("REGIONS")
            .help("Last column of the subsection strip, clamped into the image")
            .long_help("Last column of the subsection strip, clamped into the image.\nDefaults to a tenth of the image width")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64)))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject files with a bad signature or unexpected header fields"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["tint", "-i", "image.bmp"])
            .unwrap();

        assert_eq!(matches.get_one::<usize>("sections"), Some(&12));
        assert_eq!(matches.get_one::<usize>("divisions"), Some(&3));
        assert_eq!(matches.get_one::<i64>("subsection-start"), Some(&28));
        assert_eq!(matches.get_one::<i64>("subsection-end"), None);
    }

    #[test]
    fn zero_divisions_is_rejected() {
        let result = create_cmd_args().try_get_matches_from(["tint", "-i", "a.bmp", "--divisions", "0"]);

        assert!(result.is_err());
    }
}
