// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! # mmh3 C FFI Bindings
//!
//! C-callable surface over the `mmh3` digest. The boundary owns all
//! argument validation: the core hash is total over already-validated
//! inputs, so every reject happens here and is reported as a status code,
//! never as a partial result.
//!
//! # Safety
//!
//! All public functions are `unsafe` and require the caller to uphold the
//! invariants documented in each function's safety comment.

mod logging;

pub use logging::*;

use std::slice;

/// Status codes returned by every FFI entry point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mmh3Status {
    /// Operation completed successfully
    Mmh3Ok = 0,
    /// Invalid argument provided (null pointer where data was expected)
    Mmh3InvalidArgument = 1,
    /// Generic operation failure
    Mmh3OperationFailed = 2,
}

/// Full 128-bit digest, split into the two finalized 64-bit lanes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mmh3Digest128 {
    /// Low half of the digest (the partitioner/interop value).
    pub h1: u64,
    /// High half of the digest.
    pub h2: u64,
}

/// Assemble a `&[u8]` view of the caller's buffer, or reject it.
///
/// A null `data` pointer is only acceptable for a zero-length input,
/// mirroring the empty-list case at the original call boundary.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Result<&'a [u8], Mmh3Status> {
    if data.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        log::debug!("mmh3: rejected null data pointer with len={len}");
        return Err(Mmh3Status::Mmh3InvalidArgument);
    }
    Ok(slice::from_raw_parts(data, len))
}

/// Compute the full 128-bit x64 digest of `data`.
///
/// # Safety
/// - `data` must point to `len` readable bytes, or be NULL with `len == 0`.
/// - `out` must point to a writable `Mmh3Digest128`.
///
/// # Arguments
/// * `data` - Input bytes
/// * `len` - Input length in bytes
/// * `seed` - 32-bit seed
/// * `out` - Receives the digest on success; untouched on failure
///
/// # Returns
/// `Mmh3Ok` on success, `Mmh3InvalidArgument` on a rejected pointer.
///
/// # Example (C)
/// ```c
/// Mmh3Digest128 d;
/// if (mmh3_hash_x64_128((const uint8_t*)"hello", 5, 0, &d) == MMH3_OK) {
///     printf("%016llx%016llx\n", d.h1, d.h2);
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn mmh3_hash_x64_128(
    data: *const u8,
    len: usize,
    seed: u32,
    out: *mut Mmh3Digest128,
) -> Mmh3Status {
    if out.is_null() {
        return Mmh3Status::Mmh3InvalidArgument;
    }
    let input = match input_slice(data, len) {
        Ok(s) => s,
        Err(status) => return status,
    };
    let (h1, h2) = mmh3::hash128(input, seed);
    out.write(Mmh3Digest128 { h1, h2 });
    Mmh3Status::Mmh3Ok
}

/// Compute the low 64 bits of the x64-128 digest as a signed integer.
///
/// This matches the value the original partitioner boundary returns: the
/// raw bit pattern of lane `h1`, reinterpreted as `int64_t`.
///
/// # Safety
/// - `data` must point to `len` readable bytes, or be NULL with `len == 0`.
/// - `out` must point to a writable `int64_t`.
#[no_mangle]
pub unsafe extern "C" fn mmh3_hash_x64_128_low(
    data: *const u8,
    len: usize,
    seed: u32,
    out: *mut i64,
) -> Mmh3Status {
    if out.is_null() {
        return Mmh3Status::Mmh3InvalidArgument;
    }
    let input = match input_slice(data, len) {
        Ok(s) => s,
        Err(status) => return status,
    };
    out.write(mmh3::hash128_low(input, seed) as i64);
    Mmh3Status::Mmh3Ok
}

/// Compute the partition ring token for `data` (seed 0, MIN-normalized).
///
/// # Safety
/// - `data` must point to `len` readable bytes, or be NULL with `len == 0`.
/// - `out` must point to a writable `int64_t`.
#[no_mangle]
pub unsafe extern "C" fn mmh3_token(data: *const u8, len: usize, out: *mut i64) -> Mmh3Status {
    if out.is_null() {
        return Mmh3Status::Mmh3InvalidArgument;
    }
    let input = match input_slice(data, len) {
        Ok(s) => s,
        Err(status) => return status,
    };
    out.write(mmh3::token(input));
    Mmh3Status::Mmh3Ok
}
