pub mod find;
pub mod fingerprint;
pub mod scan;
