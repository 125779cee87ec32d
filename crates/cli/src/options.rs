use clap::ValueEnum;
use linestat_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One report entry per line
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}
