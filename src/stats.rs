// src/stats.rs
use crate::error::{Result, ScanError};
use std::path::PathBuf;

/// Totals of one scan.
#[derive(Debug)]
pub struct ScanReport {
    pub root: PathBuf,
    pub total_lines: usize,
    /// Every suffix-matching file, including those that failed to read.
    pub total_files: usize,
    pub failures: Vec<ScanError>,
}

impl ScanReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            total_lines: 0,
            total_files: 0,
            failures: Vec::new(),
        }
    }

    /// Account for one matching file. A failed file still counts as a file
    /// and adds nothing to the line total.
    pub fn record(&mut self, counted: Result<usize>) {
        self.total_files += 1;
        match counted {
            Ok(lines) => self.total_lines += lines,
            Err(err) => self.failures.push(err),
        }
    }

    pub fn readable_files(&self) -> usize {
        self.total_files.saturating_sub(self.failures.len())
    }
}
