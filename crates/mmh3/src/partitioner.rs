// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! Partitioner token derivation.
//!
//! A Murmur3 partitioner routes a key to a position on a signed 64-bit
//! token ring: the low half of the x64-128 digest, seed 0, reinterpreted
//! as `i64`. The ring reserves `i64::MIN`, so a key that hashes to it is
//! normalized to `i64::MAX`. Tokens computed here match values stored by
//! existing Cassandra-style clusters, which is the whole point of keeping
//! the signed-tail hash variant.

use crate::x64::hash128_low;

/// Compute the ring token for `key` (seed 0, `i64::MIN` normalized).
///
/// # Example
///
/// ```
/// // Matches `SELECT token('a')` on a Murmur3Partitioner cluster.
/// assert_eq!(mmh3::token(b"a"), -8839064797231613815);
/// ```
#[inline]
#[must_use]
pub fn token(key: &[u8]) -> i64 {
    let raw = hash128_low(key, 0) as i64;
    if raw == i64::MIN {
        i64::MAX
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        // Values cross-checked against a live Murmur3Partitioner.
        assert_eq!(token(b"a"), -8839064797231613815);
        assert_eq!(token(b"key1"), 1573573083296714675);
        assert_eq!(token(b""), 0);
    }

    #[test]
    fn test_token_is_signed_low_half() {
        let key = b"some partition key";
        assert_eq!(token(key), hash128_low(key, 0) as i64);
    }

    #[test]
    fn test_token_ordering_is_stable() {
        // Routing depends on token comparison being deterministic.
        let keys: [&[u8]; 4] = [b"alpha", b"beta", b"gamma", b"delta"];
        let first: Vec<i64> = keys.iter().map(|k| token(k)).collect();
        let second: Vec<i64> = keys.iter().map(|k| token(k)).collect();
        assert_eq!(first, second);
    }
}
