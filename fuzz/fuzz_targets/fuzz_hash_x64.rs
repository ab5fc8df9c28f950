// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::hash::Hasher;

fuzz_target!(|data: &[u8]| {
    // First four bytes (when present) drive the seed, the rest is the key.
    let (seed_bytes, key) = if data.len() >= 4 {
        data.split_at(4)
    } else {
        (&[][..], data)
    };
    let mut seed_word = [0u8; 4];
    seed_word[..seed_bytes.len()].copy_from_slice(seed_bytes);
    let seed = u32::from_le_bytes(seed_word);

    // Total function: must never panic, must be deterministic.
    let first = mmh3::hash128(key, seed);
    assert_eq!(first, mmh3::hash128(key, seed));
    assert_eq!(first.0, mmh3::hash128_low(key, seed));

    // Hasher adapter agrees with the one-shot digest regardless of how
    // the writes are chunked.
    let mut hasher = mmh3::Murmur3Hasher::with_seed(seed);
    for chunk in key.chunks(5) {
        hasher.write(chunk);
    }
    assert_eq!(hasher.finish(), first.0);

    // Token derivation never panics either.
    let _ = mmh3::token(key);
});
