use serde::{Deserialize, Serialize};

/// Rendering of a report, on the console and in the output file alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One report entry per line.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}
