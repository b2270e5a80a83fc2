// src/walker.rs
use crate::config::ScanConfig;
use crate::counter::count_file_lines;
use crate::stats::ScanReport;
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Case-sensitive, exact trailing match of the raw file name.
pub fn matches_suffix(name: &OsStr, suffixes: &[String]) -> bool {
    let name = name.as_encoded_bytes();
    suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
}

/// Recursive, depth-unbounded walk of `config.root` yielding the files whose
/// names match one of the configured suffixes.
///
/// Nothing is hidden: dot-files and ignore files are not honoured. Entries
/// are visited in file-name order. Walk errors (a missing root, an unlistable
/// directory, a link loop) are logged and skipped, except a dangling link
/// that matches a suffix: it is still yielded so the read failure is recorded.
pub fn matching_files(config: &ScanConfig) -> impl Iterator<Item = PathBuf> + '_ {
    let mut builder = WalkBuilder::new(&config.root);
    builder
        .standard_filters(false)
        .follow_links(config.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    builder.build().filter_map(move |entry| match entry {
        Ok(entry) => candidate(entry, &config.suffixes),
        Err(err) => {
            let dangling = dangling_link(&err, config);
            if dangling.is_none() {
                log::debug!("walk error skipped: {err}");
            }
            dangling
        }
    })
}

/// Innermost path an `ignore` error is about, if any.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// When links are followed, a dangling link surfaces as a walk error rather
/// than an entry. It is still a matching file.
fn dangling_link(err: &ignore::Error, config: &ScanConfig) -> Option<PathBuf> {
    let path = error_path(err)?;
    if path == config.root.as_path() {
        return None;
    }
    let name = path.file_name()?;
    if !matches_suffix(name, &config.suffixes) {
        return None;
    }
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    if !is_link || path.is_dir() {
        return None;
    }
    Some(path.to_path_buf())
}

fn candidate(entry: DirEntry, suffixes: &[String]) -> Option<PathBuf> {
    // ルート自身は対象外 (ファイルを指定しても 0 件)
    if entry.depth() == 0 {
        return None;
    }

    let is_file = match entry.file_type() {
        Some(ft) if ft.is_dir() => false,
        // Links to directories are not descended; anything else, dangling
        // links included, is treated as a file.
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        Some(_) => true,
        None => false,
    };
    if !is_file {
        return None;
    }

    if !matches_suffix(entry.file_name(), suffixes) {
        log::trace!("not matched: {}", entry.path().display());
        return None;
    }
    Some(entry.into_path())
}

/// Walk the tree and total the line records of every matching file.
pub fn scan(config: &ScanConfig) -> ScanReport {
    let mut report = ScanReport::new(config.root.clone());

    for path in matching_files(config) {
        report.record(count_file_lines(&path, config.decode));
    }

    log::info!(
        "{}: {} files, {} lines, {} unreadable",
        config.root.display(),
        report.total_files,
        report.total_lines,
        report.failures.len()
    );
    report
}
