use thiserror::Error;

use crate::io::IoError;

/// Resource failures at the file and stream fingerprint entry points.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// Input file could not be opened.
    #[error("failed to open input file `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be read to the end.
    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced while walking a directory tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root is missing or not a directory.
    #[error("scan root `{path}` is not a directory")]
    NotADirectory { path: String },

    /// A directory listing failed.
    #[error("failed to read directory `{path}`: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry or its metadata could not be read.
    #[error("failed to read entry in `{path}`: {source}")]
    ReadEntry {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A path below the root is not valid UTF-8 and cannot be reported
    /// unambiguously.
    #[error("path `{path}` is not valid UTF-8")]
    NonUtf8Path { path: String },

    /// A file inside the tree could not be fingerprinted.
    #[error("failed to fingerprint `{path}`: {source}")]
    Fingerprint {
        path: String,
        #[source]
        source: FingerprintError,
    },
}

/// Errors produced by the `fingerprint`, `scan` and `find` command boundaries.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Report could not be written to the output stream.
    #[error("failed to write report: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}
