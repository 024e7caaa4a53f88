use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub fn open(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Drains `reader` into an owned buffer. A short or failed read is an error,
/// never a partial buffer.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}
