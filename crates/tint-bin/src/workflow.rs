use std::io::{stdout, Write};

use log::info;
use tint_bmp::decode_file;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::probe_files::probe_input_file;
use crate::report::Report;
use crate::serde::FileReport;

pub(crate) fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<(), CmdErrors> {
    if options.probe {
        return probe_input_file(options);
    }
    info!("Decoding {:?}", options.input);

    let image = decode_file(&options.input, options.decoder_options)?;

    info!("Decoded {}x{} image", image.width(), image.height());

    let report = Report::new(&image, options)?;

    let stdout = stdout();
    let mut out = stdout.lock();

    if options.json {
        let file_report = FileReport::new(options.input.clone().into_os_string(), &report);

        serde_json::to_writer_pretty(&mut out, &file_report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;

    Ok(())
}
