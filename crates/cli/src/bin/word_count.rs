use linestat_engine::config::Tool;
use std::process::ExitCode;

fn main() -> ExitCode {
    linestat_cli::run(Tool::WordCount)
}
