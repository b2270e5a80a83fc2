// src/lib.rs
pub mod args;
pub mod config;
pub mod counter;
pub mod decode;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;
pub mod stats;
pub mod walker;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use decode::DecodeMode;
pub use error::{Result, ScanError};
pub use stats::ScanReport;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan `config.root` and total the matching files.
///
/// Never fails: unreadable files end up in [`ScanReport::failures`] and a
/// missing root simply produces an empty report.
pub fn run(config: &ScanConfig) -> ScanReport {
    walker::scan(config)
}
