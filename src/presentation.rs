// src/presentation.rs
use crate::error::ScanError;
use crate::stats::ScanReport;
use std::io::{self, Write};

pub const BANNER: &str = "=== Rust Code Line Counter ===";

pub fn write_summary<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Root folder : {}", report.root.display())?;
    writeln!(out, "Rust files  : {}", report.total_files)?;
    writeln!(out, "Total lines : {}", report.total_lines)?;
    Ok(())
}

/// One `[ERROR]` line per unreadable file.
pub fn write_failures<W: Write>(out: &mut W, failures: &[ScanError]) -> io::Result<()> {
    for err in failures {
        writeln!(out, "[ERROR] {err}")?;
    }
    Ok(())
}

/// Diagnostics to `diag`, then the summary to `out`. The summary is written
/// even if the diagnostics could not be.
pub fn write_report<D: Write, O: Write>(
    diag: &mut D,
    out: &mut O,
    report: &ScanReport,
) -> io::Result<()> {
    let diagnostics = write_failures(diag, &report.failures);

    write_summary(out, report)?;
    out.flush()?;
    diagnostics
}

pub fn print_report(report: &ScanReport) -> io::Result<()> {
    write_report(&mut io::stderr().lock(), &mut io::stdout().lock(), report)
}
