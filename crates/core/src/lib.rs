#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod format;
pub mod radix;
pub mod stats;
pub mod words;
