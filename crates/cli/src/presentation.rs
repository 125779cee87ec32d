// crates/cli/src/presentation.rs
use crate::error::AppError;
use linestat_engine::config::Tool;
use linestat_engine::error::EngineError;
use linestat_engine::options::OutputFormat;

pub fn print_usage(tool: Tool) {
    println!("Usage: {} fileWithData.txt", tool.program_name());
}

/// Diagnostics for lines dropped from the computation. In JSON mode they are
/// part of the document instead.
pub fn print_skipped(skipped: &[String], format: OutputFormat) {
    if format != OutputFormat::Text {
        return;
    }
    for line in skipped {
        println!("Invalid data: {line}");
    }
}

pub fn print_report(rendered: &str) {
    println!("{rendered}");
}

/// Fatal diagnostic. Lines skipped before the failure are listed first.
pub fn print_error(tool: Tool, err: &AppError, format: OutputFormat) {
    match err {
        AppError::Usage(_) => print_usage(tool),
        AppError::Engine(EngineError::NoValidNumbers { skipped }) => {
            print_skipped(skipped, format);
            println!("{err}");
        }
        AppError::Engine(_) => println!("Error: {err}"),
    }
}
