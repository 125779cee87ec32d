use crate::args::Args;
use crate::error::{AppError, Result};
use crate::{logging, presentation};
use clap::error::ErrorKind;
use linestat_engine::config::Tool;
use linestat_engine::options::OutputFormat;
use linestat_engine::report::persist;
use log::debug;
use std::ffi::OsString;
use std::process::ExitCode;

/// Entry point shared by the three binaries.
#[must_use]
pub fn run(tool: Tool) -> ExitCode {
    run_from(tool, std::env::args_os())
}

#[must_use]
pub fn run_from<I, T>(tool: Tool, argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    logging::init();

    let args = match Args::try_parse_for(tool, argv) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if let Err(io) = e.print() {
                debug!("failed to print {:?}: {io}", e.kind());
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!("rejected command line: {e}");
            presentation::print_error(tool, &AppError::from(e), OutputFormat::Text);
            return ExitCode::FAILURE;
        }
    };

    let format = OutputFormat::from(args.format);
    match execute(tool, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presentation::print_error(tool, &e, format);
            ExitCode::FAILURE
        }
    }
}

fn execute(tool: Tool, args: Args) -> Result<()> {
    let config = args.into_config(tool)?;
    let report = linestat_engine::run(&config)?;

    presentation::print_skipped(&report.skipped, config.format);
    let rendered = report.render(config.format)?;
    presentation::print_report(&rendered);

    persist(&config.output_path(), &rendered)?;
    Ok(())
}
