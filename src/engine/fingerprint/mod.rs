//! Whitespace-insensitive content fingerprints.
//!
//! A fingerprint is the seed-1 Murmur2 hash of a buffer after tab, line feed,
//! carriage return and space bytes have been removed, widened to `i64` for
//! transport in identifier fields.

pub mod filter;
pub mod murmur2;

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::domain::error::FingerprintError;
use crate::io::reader;

pub use filter::{filter_whitespace, normalize_line_endings};
pub use murmur2::murmur2;

/// Preprocessing applied in front of the hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerprintMode {
    /// Whitespace filter only.
    #[default]
    Raw,
    /// Line-ending normalization, then the whitespace filter.
    Normalized,
}

impl FingerprintMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Normalized => "normalized",
        }
    }
}

impl fmt::Display for FingerprintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fingerprints an in-memory buffer. Total over every input.
pub fn fingerprint_bytes(data: &[u8]) -> i64 {
    widen(murmur2(&filter_whitespace(data)))
}

/// Fingerprints `data` after collapsing `\r\n` and lone `\r` to `\n`.
pub fn fingerprint_normalized(data: &[u8]) -> i64 {
    fingerprint_bytes(&normalize_line_endings(data))
}

pub fn fingerprint_with_mode(data: &[u8], mode: FingerprintMode) -> i64 {
    match mode {
        FingerprintMode::Raw => fingerprint_bytes(data),
        FingerprintMode::Normalized => fingerprint_normalized(data),
    }
}

/// Drains `reader` to the end and fingerprints its bytes.
pub fn fingerprint_reader<R: Read>(reader: R) -> Result<i64, FingerprintError> {
    fingerprint_reader_with_mode(reader, FingerprintMode::Raw)
}

pub fn fingerprint_reader_with_mode<R: Read>(
    reader: R,
    mode: FingerprintMode,
) -> Result<i64, FingerprintError> {
    let data = reader::read_all(reader).map_err(|source| FingerprintError::Read { source })?;
    Ok(fingerprint_with_mode(&data, mode))
}

/// Reads the whole file at `path` and fingerprints it.
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<i64, FingerprintError> {
    fingerprint_file_with_mode(path, FingerprintMode::Raw)
}

pub fn fingerprint_file_with_mode(
    path: impl AsRef<Path>,
    mode: FingerprintMode,
) -> Result<i64, FingerprintError> {
    let data = read_file(path.as_ref())?;
    Ok(fingerprint_with_mode(&data, mode))
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, FingerprintError> {
    let file = reader::open(path).map_err(|source| FingerprintError::Open {
        path: path.display().to_string(),
        source,
    })?;
    reader::read_all(file).map_err(|source| FingerprintError::Read { source })
}

fn widen(hash: u32) -> i64 {
    i64::from(hash)
}
