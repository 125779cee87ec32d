// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] linestat_engine::error::EngineError),

    #[error("Invalid arguments: {0}")]
    Usage(#[from] clap::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
