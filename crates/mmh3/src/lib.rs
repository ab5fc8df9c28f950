// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! # mmh3 - MurmurHash3 x64-128 for partitioner interop
//!
//! A bit-exact implementation of the MurmurHash3 x64-128 digest in the
//! signed-tail variant used by Cassandra-family partitioners. Anything
//! that routes keys by stored Murmur3 tokens needs this exact bit
//! pattern, so compatibility is the design goal, not hash quality tuning
//! (and emphatically not cryptographic strength).
//!
//! ## Quick Start
//!
//! ```rust
//! // Low 64 bits of the 128-bit digest, seed 0.
//! let h = mmh3::hash128_low(b"hello", 0);
//! assert_eq!(h, 0xcbd8a7b341bd9b02);
//!
//! // Ring token for a partition key.
//! let t = mmh3::token(b"a");
//! assert_eq!(t, -8839064797231613815);
//! ```
//!
//! ## Key Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`hash128`] | Full 128-bit digest as `(h1, h2)` lane pair |
//! | [`hash128_low`] | Low 64 bits of the digest (the interop value) |
//! | [`token`] | Signed ring token, seed 0, `i64::MIN` normalized |
//! | [`Murmur3BuildHasher`] | Seeded `std::hash` integration |
//!
//! ## Modules Overview
//!
//! - [`x64`] - The core algorithm (block, tail, finalization phases)
//! - [`partitioner`] - Token derivation for key routing
//! - [`build_hasher`] - `std::hash::Hasher`/`BuildHasher` adapter
//!
//! ## See Also
//!
//! - [MurmurHash3 reference](https://github.com/aappleby/smhasher)
//! - The `mmh3-c` crate for the C-callable boundary

pub mod build_hasher;
pub mod partitioner;
pub mod x64;

pub use build_hasher::{Murmur3BuildHasher, Murmur3Hasher};
pub use partitioner::token;
pub use x64::{hash128, hash128_low};
