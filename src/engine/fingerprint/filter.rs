//! Byte-level preprocessing applied before hashing.

const TAB: u8 = b'\t';
const LF: u8 = b'\n';
const CR: u8 = b'\r';
const SPACE: u8 = b' ';

/// Returns `true` for the bytes the fingerprint ignores.
fn is_ignored_byte(byte: u8) -> bool {
    matches!(byte, TAB | LF | CR | SPACE)
}

/// Copies `data` without tab, line feed, carriage return and space bytes.
pub fn filter_whitespace(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    out.extend(data.iter().copied().filter(|byte| !is_ignored_byte(*byte)));
    out
}

/// Rewrites `\r\n` and lone `\r` to `\n`.
///
/// [`filter_whitespace`] strips both CR and LF afterwards, so this stage only
/// changes a fingerprint once a mode hashes without the filter. Keep the two
/// stages paired.
pub fn normalize_line_endings(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut bytes = data.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == CR {
            bytes.next_if_eq(&LF);
            out.push(LF);
        } else {
            out.push(byte);
        }
    }
    out
}
