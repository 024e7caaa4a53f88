pub mod fingerprint;
pub mod scan;
