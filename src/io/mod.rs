pub mod error;
pub mod reader;
pub mod writer;

pub use error::IoError;
