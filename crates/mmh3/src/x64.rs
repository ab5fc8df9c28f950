// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! MurmurHash3 x64-128 core (Cassandra-compatible signed-tail variant).
//!
//! This is Austin Appleby's public-domain `MurmurHash3_x64_128` with one
//! deliberate deviation inherited from the Cassandra ecosystem: tail bytes
//! are **sign-extended** (cast through `i8`) before being folded into the
//! lane words. Canonical MurmurHash3 zero-extends them. The two variants
//! agree on any input whose tail bytes are all `< 0x80`, and diverge
//! otherwise. Hashes stored by existing partitioners use the signed
//! variant, so it is the compatibility target here, not a bug to fix.
//!
//! # Parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Block size | 16 bytes (two 64-bit lanes) |
//! | Word order | little-endian |
//! | c1 | 0x87c37b91114253d5 |
//! | c2 | 0x4cf5ad432745937f |
//! | Seed | 32-bit, zero-extended into both lanes |
//! | Tail bytes | sign-extended (`i8` cast) |
//!
//! # Test Vector
//!
//! ```
//! use mmh3::x64::hash128;
//!
//! // Canonical vector: "hello", seed 0 (no high-bit tail bytes, so the
//! // signed variant matches the reference digest exactly).
//! let (h1, h2) = hash128(b"hello", 0);
//! assert_eq!(h1, 0xcbd8a7b341bd9b02);
//! assert_eq!(h2, 0x5b1e906a48ae1d19);
//! ```
//!
//! All arithmetic is wrapping; overflow is part of the algorithm. The
//! functions are total and pure: no allocation, no global state, safe to
//! call concurrently from any number of threads.

/// First multiplicative mixing constant.
const C1: u64 = 0x87c37b91114253d5;

/// Second multiplicative mixing constant.
const C2: u64 = 0x4cf5ad432745937f;

/// Finalization mix: forces all bits of the lane to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

/// Sign-extend a tail byte to 64 bits before shifting it into a lane.
///
/// The reference C reads tail bytes through `int8_t`, so a byte with the
/// high bit set contributes ones in every bit above its shift position.
#[inline]
fn tail_byte(b: u8) -> u64 {
    b as i8 as i64 as u64
}

/// Compute the full 128-bit MurmurHash3 x64-128 digest of `key`.
///
/// Returns the two finalized 64-bit lanes `(h1, h2)`. `h1` is the low half
/// of the digest and the value partitioners use for token assignment.
///
/// # Arguments
///
/// * `key` - The bytes to hash (any length, including empty)
/// * `seed` - 32-bit seed, zero-extended into both lanes
#[must_use]
pub fn hash128(key: &[u8], seed: u32) -> (u64, u64) {
    let len = key.len();
    let mut h1 = u64::from(seed);
    let mut h2 = u64::from(seed);

    // Body: consecutive 16-byte blocks, two little-endian 64-bit words each.
    let nblocks = len / 16;
    for block in key[..nblocks * 16].chunks_exact(16) {
        let mut word = [0u8; 8];
        word.copy_from_slice(&block[..8]);
        let mut k1 = u64::from_le_bytes(word);
        word.copy_from_slice(&block[8..]);
        let mut k2 = u64::from_le_bytes(word);

        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    // Tail: up to 15 remaining bytes, folded highest offset first. The
    // reference expresses this as a switch with fallthrough from case 15
    // down to case 1; the descending loops below accumulate in the same
    // order. Bytes 8..15 land in k2, bytes 0..7 in k1.
    let tail = &key[nblocks * 16..];
    let tail_len = tail.len();

    if tail_len > 8 {
        let mut k2 = 0u64;
        for i in (8..tail_len).rev() {
            k2 ^= tail_byte(tail[i]) << (8 * (i - 8));
        }
        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
    }
    if tail_len > 0 {
        let mut k1 = 0u64;
        for i in (0..tail_len.min(8)).rev() {
            k1 ^= tail_byte(tail[i]) << (8 * i);
        }
        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
    }

    // Finalization: fold the length in as an integer, cross-add the lanes,
    // avalanche each, cross-add again.
    h1 ^= len as u64;
    h2 ^= len as u64;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// Compute the low 64 bits of the x64-128 digest.
///
/// This is the interop surface: the exact bit pattern other
/// implementations of the signed-tail variant produce for `(key, seed)`.
#[inline]
#[must_use]
pub fn hash128_low(key: &[u8], seed: u32) -> u64 {
    hash128(key, seed).0
}
