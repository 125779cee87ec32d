use crate::options::OutputFormat;
use derive_builder::Builder;
use serde::Serialize;
use std::path::PathBuf;

/// The three report-producing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Descriptive statistics of one number per line.
    Statistics,
    /// Binary and hexadecimal form of one integer per line.
    Conversion,
    /// Word frequencies of free text.
    WordCount,
}

impl Tool {
    #[must_use]
    pub const fn program_name(self) -> &'static str {
        match self {
            Self::Statistics => "compute_statistics",
            Self::Conversion => "convert_numbers",
            Self::WordCount => "word_count",
        }
    }

    /// Result file written to the working directory unless overridden.
    #[must_use]
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Statistics => "StatisticsResults.txt",
            Self::Conversion => "ConvertionResults.txt",
            Self::WordCount => "WordCountResults.txt",
        }
    }

    #[must_use]
    pub const fn about(self) -> &'static str {
        match self {
            Self::Statistics => {
                "Computes mean, median, mode, variance and standard deviation of a file of numbers"
            }
            Self::Conversion => "Converts each integer of a file to binary and hexadecimal",
            Self::WordCount => "Counts distinct words and their frequencies in a text file",
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    pub tool: Tool,
    pub input: PathBuf,
    #[builder(default, setter(strip_option))]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
}

impl RunConfig {
    /// Where the report is persisted.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.tool.default_output()))
    }
}

impl From<RunConfigBuilderError> for crate::error::EngineError {
    fn from(e: RunConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_tool_file_name() {
        let config = RunConfigBuilder::default()
            .tool(Tool::Conversion)
            .input("numbers.txt")
            .build()
            .unwrap();
        assert_eq!(config.output_path(), PathBuf::from("ConvertionResults.txt"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn output_override_wins() {
        let config = RunConfigBuilder::default()
            .tool(Tool::WordCount)
            .input("words.txt")
            .output("out/custom.txt")
            .format(OutputFormat::Json)
            .build()
            .unwrap();
        assert_eq!(config.output_path(), PathBuf::from("out/custom.txt"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn missing_input_is_a_config_error() {
        let err = RunConfigBuilder::default()
            .tool(Tool::Statistics)
            .build()
            .unwrap_err();
        let err = crate::error::EngineError::from(err);
        assert!(matches!(err, crate::error::EngineError::Config(_)));
    }
}
