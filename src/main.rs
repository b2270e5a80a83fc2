// src/main.rs
use clap::Parser;
use rs_linecount::args::Args;
use rs_linecount::config::ScanConfig;
use rs_linecount::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Logger Error: {e}");
    }

    let config = match ScanConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("scan config: {config:?}");

    let report = rs_linecount::run(&config);

    // 書き込み失敗 (broken pipe など) でも終了コードは変えない
    if let Err(e) = presentation::print_report(&report) {
        log::debug!("failed to write report: {e}");
    }
    ExitCode::SUCCESS
}
