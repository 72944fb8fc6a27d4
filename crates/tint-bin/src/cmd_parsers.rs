use clap::ArgMatches;
use tint_core::options::DecoderOptions;

pub mod global_options;

/// Build decoder options from the command line
///
/// Limits not given on the command line are lifted, the command line
/// decodes whatever fits in memory
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::new_cmd();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.max_height());
    let strict_mode = options.get_flag("strict");

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
}
