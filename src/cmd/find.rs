use std::io::Write;
use std::path::Path;

use crate::domain::error::{CommandError, ScanError};
use crate::domain::report::FindReport;
use crate::engine::fingerprint::FingerprintMode;
use crate::engine::scan::{find_matches, fingerprint_tree};
use crate::io::writer;

/// Exit code when the scan completed but nothing matched.
pub const NO_MATCH_EXIT_CODE: i32 = 2;

/// Lists files below `root` whose fingerprint equals `fingerprint`.
pub fn execute(
    root: &Path,
    fingerprint: i64,
    mode: FingerprintMode,
) -> Result<FindReport, ScanError> {
    let files = fingerprint_tree(root, mode)?;
    Ok(FindReport {
        fingerprint,
        mode,
        matches: find_matches(&files, fingerprint),
    })
}

/// Execute `find` and write the report to `output`.
pub fn run<W: Write>(
    root: &Path,
    fingerprint: i64,
    mode: FingerprintMode,
    output: W,
) -> Result<FindReport, CommandError> {
    let report = execute(root, fingerprint, mode)?;
    writer::write_json(output, &report).map_err(|source| CommandError::WriteOutput { source })?;
    Ok(report)
}

pub fn exit_code(report: &FindReport) -> i32 {
    if report.matches.is_empty() {
        NO_MATCH_EXIT_CODE
    } else {
        0
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "walk_scan_root".to_string(),
        "fingerprint_files".to_string(),
        "compare_fingerprints".to_string(),
        "write_find_report".to_string(),
    ]
}

/// Determinism guards planned for the `find` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fixed_seed_murmur2".to_string(),
        "stable_relative_path_ordering".to_string(),
    ]
}
