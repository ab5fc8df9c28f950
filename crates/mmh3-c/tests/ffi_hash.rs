// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

// Exercise the C surface the way a foreign caller would: raw pointers in,
// status codes and out-params back.

use mmh3_c::{
    mmh3_hash_x64_128, mmh3_hash_x64_128_low, mmh3_token, Mmh3Digest128, Mmh3Status,
};

#[test]
fn test_digest_matches_core_crate() {
    let data = b"hello";
    let mut out = Mmh3Digest128 { h1: 0, h2: 0 };
    let status = unsafe { mmh3_hash_x64_128(data.as_ptr(), data.len(), 0, &mut out) };
    assert_eq!(status, Mmh3Status::Mmh3Ok);
    assert_eq!((out.h1, out.h2), mmh3::hash128(data, 0));
    assert_eq!(out.h1, 0xcbd8a7b341bd9b02);
}

#[test]
fn test_low_half_is_signed_bit_pattern() {
    let data = b"hello";
    let mut out = 0i64;
    let status = unsafe { mmh3_hash_x64_128_low(data.as_ptr(), data.len(), 0, &mut out) };
    assert_eq!(status, Mmh3Status::Mmh3Ok);
    assert_eq!(out, mmh3::hash128_low(data, 0) as i64);
    assert_eq!(out, -3758069500696749310);
}

#[test]
fn test_token_entry_point() {
    let key = b"a";
    let mut out = 0i64;
    let status = unsafe { mmh3_token(key.as_ptr(), key.len(), &mut out) };
    assert_eq!(status, Mmh3Status::Mmh3Ok);
    assert_eq!(out, -8839064797231613815);
}

#[test]
fn test_null_data_with_zero_len_is_empty_input() {
    let mut out = Mmh3Digest128 { h1: 1, h2: 1 };
    let status = unsafe { mmh3_hash_x64_128(std::ptr::null(), 0, 0, &mut out) };
    assert_eq!(status, Mmh3Status::Mmh3Ok);
    assert_eq!((out.h1, out.h2), (0, 0));
}

#[test]
fn test_null_data_with_nonzero_len_rejected() {
    let mut out = Mmh3Digest128 { h1: 7, h2: 7 };
    let status = unsafe { mmh3_hash_x64_128(std::ptr::null(), 5, 0, &mut out) };
    assert_eq!(status, Mmh3Status::Mmh3InvalidArgument);
    // Output must be untouched on failure.
    assert_eq!((out.h1, out.h2), (7, 7));
}

#[test]
fn test_null_out_pointer_rejected() {
    let data = b"x";
    let status = unsafe { mmh3_hash_x64_128(data.as_ptr(), 1, 0, std::ptr::null_mut()) };
    assert_eq!(status, Mmh3Status::Mmh3InvalidArgument);
    let status = unsafe { mmh3_hash_x64_128_low(data.as_ptr(), 1, 0, std::ptr::null_mut()) };
    assert_eq!(status, Mmh3Status::Mmh3InvalidArgument);
    let status = unsafe { mmh3_token(data.as_ptr(), 1, std::ptr::null_mut()) };
    assert_eq!(status, Mmh3Status::Mmh3InvalidArgument);
}
