// crates/engine/src/reader.rs
use crate::error::{EngineError, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Reads every line of `path`, line terminators removed.
///
/// # Errors
/// `FileNotFound` when the path does not exist, `FileRead` for any other
/// open or read failure (including invalid UTF-8).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => EngineError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
