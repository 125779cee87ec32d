use crate::options::OutputFormat;
use clap::{CommandFactory, FromArgMatches, Parser};
use linestat_engine::config::{RunConfig, RunConfigBuilder, Tool};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version = crate::VERSION)]
pub struct Args {
    /// Input file, one entry per line
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Write the report here instead of the tool's result file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (console and file)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// The clap command carrying the tool's own name and description.
    #[must_use]
    pub fn command_for(tool: Tool) -> clap::Command {
        Self::command()
            .name(tool.program_name())
            .bin_name(tool.program_name())
            .about(tool.about())
    }

    /// # Errors
    /// Returns the clap error for help/version requests as well as for
    /// malformed command lines; the caller tells them apart by kind.
    pub fn try_parse_for<I, T>(tool: Tool, argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_for(tool).try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }

    /// # Errors
    /// Fails only if the builder rejects the configuration.
    pub fn into_config(self, tool: Tool) -> linestat_engine::error::Result<RunConfig> {
        let mut builder = RunConfigBuilder::default();
        builder
            .tool(tool)
            .input(self.input)
            .format(linestat_engine::options::OutputFormat::from(self.format));
        if let Some(output) = self.output {
            builder.output(output);
        }
        Ok(builder.build()?)
    }
}
