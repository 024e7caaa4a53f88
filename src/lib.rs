//! Whitespace-insensitive content fingerprints compatible with a fixed legacy
//! Murmur2 definition.
//!
//! ```
//! use contentprint::engine::fingerprint::fingerprint_bytes;
//!
//! assert_eq!(fingerprint_bytes(b"hel lo"), fingerprint_bytes(b"hello"));
//! ```

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;

pub use domain::error::FingerprintError;
pub use engine::fingerprint::{
    FingerprintMode, fingerprint_bytes, fingerprint_file, fingerprint_normalized,
    fingerprint_reader,
};
