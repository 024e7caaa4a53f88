use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::domain::error::{CommandError, ScanError};
use crate::domain::report::ScanReport;
use crate::engine::fingerprint::FingerprintMode;
use crate::engine::scan::{fingerprint_tree, group_duplicates};
use crate::io::writer;

/// Command-level options for directory scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCommandOptions {
    pub mode: FingerprintMode,
    /// Keep only files that share a fingerprint with another file.
    pub duplicates_only: bool,
}

/// Scans `root` and builds the report. `file_count` is always the number of
/// files scanned, even when `duplicates_only` drops some from `files`.
pub fn execute(root: &Path, options: ScanCommandOptions) -> Result<ScanReport, ScanError> {
    let mut files = fingerprint_tree(root, options.mode)?;
    let file_count = files.len();
    let duplicates = group_duplicates(&files);

    if options.duplicates_only {
        let shared: BTreeSet<i64> = duplicates.iter().map(|group| group.fingerprint).collect();
        files.retain(|file| shared.contains(&file.fingerprint));
    }

    Ok(ScanReport {
        root: root.display().to_string(),
        mode: options.mode,
        file_count,
        files,
        duplicates,
    })
}

/// Execute `scan` and write the report to `output`.
pub fn run<W: Write>(
    root: &Path,
    output: W,
    options: ScanCommandOptions,
) -> Result<ScanReport, CommandError> {
    let report = execute(root, options)?;
    writer::write_json(output, &report).map_err(|source| CommandError::WriteOutput { source })?;
    Ok(report)
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "walk_scan_root".to_string(),
        "fingerprint_files".to_string(),
        "sort_by_relative_path".to_string(),
        "group_duplicate_fingerprints".to_string(),
        "write_scan_report".to_string(),
    ]
}

/// Determinism guards planned for the `scan` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fixed_seed_murmur2".to_string(),
        "stable_relative_path_ordering".to_string(),
        "directory_symlinks_skipped".to_string(),
    ]
}
