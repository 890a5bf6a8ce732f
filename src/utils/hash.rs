//! Unified hashing utilities using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing. Snapshots
//! carry a fingerprint of the source text and config they were built from,
//! so an unchanged rebuild can be skipped.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::compute("some content"); // -> u64
//! let label = hash::short_hex(h); // -> "a1b2c3d4"
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute one 64-bit hash over several byte slices.
///
/// Each part is length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn compute_parts<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> u64 {
    let mut hasher = FxHasher::default();
    for part in parts {
        hasher.write_usize(part.len());
        hasher.write(part);
    }
    hasher.finish()
}

/// Render a hash as an 8-char hex string.
#[inline]
pub fn short_hex(hash: u64) -> String {
    format!("{hash:016x}")[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_deterministic() {
        assert_eq!(compute("nav"), compute("nav"));
        assert_ne!(compute("nav"), compute("nav "));
    }

    #[test]
    fn test_compute_parts_length_prefixed() {
        let a = compute_parts([b"ab".as_slice(), b"c".as_slice()]);
        let b = compute_parts([b"a".as_slice(), b"bc".as_slice()]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_hex_len() {
        assert_eq!(short_hex(compute("nav")).len(), 8);
        assert_eq!(short_hex(0), "00000000");
    }
}
