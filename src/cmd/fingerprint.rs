use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::error::{CommandError, FingerprintError};
use crate::domain::report::{FileFingerprint, FingerprintReport};
use crate::engine::fingerprint::{self, FingerprintMode};
use crate::io::{reader, writer};

/// Path label used for standard input.
pub const STDIN_LABEL: &str = "-";

/// Command-level options for fingerprint execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintCommandOptions {
    pub mode: FingerprintMode,
}

/// Fingerprints each path in order. An empty path list, or a `-` entry, reads
/// `stdin`; stdin is drained once and every `-` entry reports those bytes.
pub fn execute<R: Read>(
    paths: &[PathBuf],
    stdin: R,
    options: FingerprintCommandOptions,
) -> Result<FingerprintReport, FingerprintError> {
    let mut stdin = StdinSource::new(stdin);
    let mut files = Vec::with_capacity(paths.len().max(1));

    if paths.is_empty() {
        files.push(fingerprint_stdin(&mut stdin, options.mode)?);
    }
    for path in paths {
        if path.as_os_str() == STDIN_LABEL {
            files.push(fingerprint_stdin(&mut stdin, options.mode)?);
        } else {
            files.push(fingerprint_path(path, options.mode)?);
        }
    }

    Ok(FingerprintReport {
        mode: options.mode,
        files,
    })
}

/// Execute `fingerprint` and write the report to `output`.
pub fn run<R: Read, W: Write>(
    paths: &[PathBuf],
    stdin: R,
    output: W,
    options: FingerprintCommandOptions,
) -> Result<FingerprintReport, CommandError> {
    let report = execute(paths, stdin, options)?;
    writer::write_json(output, &report).map_err(|source| CommandError::WriteOutput { source })?;
    Ok(report)
}

/// Stdin drained on first use; later reads return the same bytes.
struct StdinSource<R> {
    reader: Option<R>,
    data: Vec<u8>,
}

impl<R: Read> StdinSource<R> {
    fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            data: Vec::new(),
        }
    }

    fn bytes(&mut self) -> Result<&[u8], FingerprintError> {
        if let Some(input) = self.reader.take() {
            self.data =
                reader::read_all(input).map_err(|source| FingerprintError::Read { source })?;
        }
        Ok(&self.data)
    }
}

fn fingerprint_stdin<R: Read>(
    stdin: &mut StdinSource<R>,
    mode: FingerprintMode,
) -> Result<FileFingerprint, FingerprintError> {
    let data = stdin.bytes()?;
    Ok(FileFingerprint {
        path: STDIN_LABEL.to_string(),
        fingerprint: fingerprint::fingerprint_with_mode(data, mode),
        size: data.len() as u64,
    })
}

fn fingerprint_path(
    path: &Path,
    mode: FingerprintMode,
) -> Result<FileFingerprint, FingerprintError> {
    let data = fingerprint::read_file(path)?;
    Ok(FileFingerprint {
        path: path.display().to_string(),
        fingerprint: fingerprint::fingerprint_with_mode(&data, mode),
        size: data.len() as u64,
    })
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps(options: FingerprintCommandOptions) -> Vec<String> {
    let mut steps = vec!["read_fingerprint_input".to_string()];
    if options.mode == FingerprintMode::Normalized {
        steps.push("normalize_line_endings".to_string());
    }
    steps.extend([
        "filter_whitespace".to_string(),
        "compute_murmur2".to_string(),
        "write_fingerprint_report".to_string(),
    ]);
    steps
}

/// Determinism guards planned for the `fingerprint` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fixed_seed_murmur2".to_string(),
        "argument_order_preserved".to_string(),
    ]
}
