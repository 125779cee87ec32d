use crate::config::Tool;
use crate::error::{EngineError, Result};
use crate::options::OutputFormat;
use crate::tools::{Analysis, Results};
use linestat_core::format::format_seconds;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Ordered report of one run, closed by the execution-time line.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tool: Tool,
    pub entries: Vec<String>,
    pub skipped: Vec<String>,
    pub results: Results,
    pub elapsed: Duration,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: Tool,
    skipped: &'a [String],
    results: &'a Results,
    execution_time_seconds: f64,
}

impl Report {
    #[must_use]
    pub fn new(tool: Tool, analysis: Analysis, elapsed: Duration) -> Self {
        Self {
            tool,
            entries: analysis.entries,
            skipped: analysis.skipped,
            results: analysis.results,
            elapsed,
        }
    }

    #[must_use]
    pub fn execution_time_line(&self) -> String {
        format!(
            "Execution time: {} seconds",
            format_seconds(self.elapsed.as_secs_f64())
        )
    }

    /// Entries followed by the execution-time line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.entries.clone();
        lines.push(self.execution_time_line());
        lines
    }

    /// The exact text that goes to the console and to the output file.
    ///
    /// # Errors
    /// Only JSON serialization can fail.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.lines().join("\n")),
            OutputFormat::Json => {
                let doc = JsonReport {
                    tool: self.tool,
                    skipped: &self.skipped,
                    results: &self.results,
                    execution_time_seconds: self.elapsed.as_secs_f64(),
                };
                Ok(serde_json::to_string_pretty(&doc)?)
            }
        }
    }
}

/// Writes `contents` verbatim to `path`, replacing any existing file.
///
/// # Errors
/// `FileWrite` if the file cannot be created or written.
pub fn persist(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote report to {}", path.display());
    Ok(())
}
