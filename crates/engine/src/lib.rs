// crates/engine/src/lib.rs
use std::time::Instant;

pub mod config;
pub mod error;
pub mod options;
pub mod reader;
pub mod report;
pub mod tools;

use crate::config::{RunConfig, Tool};
use crate::error::Result;
use crate::report::Report;

/// Reads the input file and runs the configured tool over it.
///
/// The measured time covers reading, parsing and computation; printing and
/// persisting the report are left to the caller.
///
/// # Errors
///
/// Fatal conditions only: a missing or unreadable input file, and for the
/// statistics tool an input without a single valid number. Malformed lines
/// are part of the returned report.
pub fn run(config: &RunConfig) -> Result<Report> {
    let started = Instant::now();

    let lines = reader::read_lines(&config.input)?;
    let analysis = match config.tool {
        Tool::Statistics => tools::statistics::analyze(&lines)?,
        Tool::Conversion => tools::conversion::analyze(&lines),
        Tool::WordCount => tools::word_count::analyze(&lines),
    };

    let elapsed = started.elapsed();
    log::debug!("{} finished in {elapsed:?}", config.tool.program_name());

    Ok(Report::new(config.tool, analysis, elapsed))
}
