// crates/cli/src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

pub use app::run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
