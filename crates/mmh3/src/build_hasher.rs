// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! `std::hash` adapter so the digest can drive `HashMap`/`HashSet`
//! consumers that need a stable, seed-controlled hash across processes.
//!
//! Murmur3 x64-128 is a one-shot algorithm (the length is folded into
//! finalization), so the adapter buffers written bytes and digests them in
//! `finish`. That makes it a poor fit for hot in-process maps, but the
//! right fit when hashes must match values computed elsewhere.

use std::hash::{BuildHasher, Hasher};

use crate::x64::hash128_low;

/// A [`Hasher`] producing the low 64 bits of the x64-128 digest.
#[derive(Debug, Clone, Default)]
pub struct Murmur3Hasher {
    seed: u32,
    buf: Vec<u8>,
}

impl Murmur3Hasher {
    /// Create a hasher with the given 32-bit seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            buf: Vec::new(),
        }
    }
}

impl Hasher for Murmur3Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        hash128_low(&self.buf, self.seed)
    }
}

/// A [`BuildHasher`] handing out seeded [`Murmur3Hasher`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3BuildHasher {
    seed: u32,
}

impl Murmur3BuildHasher {
    /// Create a builder whose hashers all use `seed`.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

impl BuildHasher for Murmur3BuildHasher {
    type Hasher = Murmur3Hasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        Murmur3Hasher::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_hasher_matches_one_shot() {
        let mut h = Murmur3Hasher::with_seed(0);
        h.write(b"hello");
        assert_eq!(h.finish(), hash128_low(b"hello", 0));
    }

    #[test]
    fn test_split_writes_match_single_write() {
        let data: Vec<u8> = (0..100u8).collect();
        let mut whole = Murmur3Hasher::with_seed(9);
        whole.write(&data);

        let mut split = Murmur3Hasher::with_seed(9);
        for chunk in data.chunks(7) {
            split.write(chunk);
        }
        assert_eq!(whole.finish(), split.finish());
    }

    #[test]
    fn test_build_hasher_seeds_propagate() {
        let a = Murmur3BuildHasher::with_seed(1).build_hasher().finish();
        let b = Murmur3BuildHasher::with_seed(2).build_hasher().finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_usable_as_map_hasher() {
        let mut map: HashMap<&[u8], u32, Murmur3BuildHasher> =
            HashMap::with_hasher(Murmur3BuildHasher::with_seed(0));
        map.insert(b"alpha", 1);
        map.insert(b"beta", 2);
        assert_eq!(map.get(b"alpha".as_slice()), Some(&1));
        assert_eq!(map.get(b"beta".as_slice()), Some(&2));
    }
}
