//! Seed-1 Murmur2 mixing over an already filtered buffer.
//!
//! The chunk decoding and tail order encode an externally fixed format and
//! must stay bit-exact.

const SEED: u32 = 1;
const M: u32 = 0x5bd1e995;
const R: u32 = 24;

/// Hashes `data` as-is. Callers normally go through
/// [`fingerprint_bytes`](super::fingerprint_bytes), which filters first.
///
/// Lengths of 2^32 bytes or more are truncated to 32 bits.
pub fn murmur2(data: &[u8]) -> u32 {
    let mut h = SEED ^ data.len() as u32;

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if let Some(first) = tail.first() {
        h ^= u32::from(*first);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}
