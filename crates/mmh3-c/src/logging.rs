// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! Logging initialization for the mmh3 C FFI

use std::ffi::CStr;
use std::os::raw::c_char;

use super::Mmh3Status;

/// Log level for mmh3 logging
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mmh3LogLevel {
    Mmh3LogOff = 0,
    Mmh3LogError = 1,
    Mmh3LogWarn = 2,
    Mmh3LogInfo = 3,
    Mmh3LogDebug = 4,
    Mmh3LogTrace = 5,
}

impl From<Mmh3LogLevel> for log::LevelFilter {
    fn from(level: Mmh3LogLevel) -> Self {
        match level {
            Mmh3LogLevel::Mmh3LogOff => log::LevelFilter::Off,
            Mmh3LogLevel::Mmh3LogError => log::LevelFilter::Error,
            Mmh3LogLevel::Mmh3LogWarn => log::LevelFilter::Warn,
            Mmh3LogLevel::Mmh3LogInfo => log::LevelFilter::Info,
            Mmh3LogLevel::Mmh3LogDebug => log::LevelFilter::Debug,
            Mmh3LogLevel::Mmh3LogTrace => log::LevelFilter::Trace,
        }
    }
}

/// Initialize mmh3 logging with console output
///
/// # Safety
/// Must be called from a single thread during initialization.
///
/// # Arguments
/// * `level` - Minimum log level to display
///
/// # Returns
/// `Mmh3Ok` on success, `Mmh3OperationFailed` if already initialized
#[no_mangle]
pub unsafe extern "C" fn mmh3_logging_init(level: Mmh3LogLevel) -> Mmh3Status {
    let filter: log::LevelFilter = level.into();

    match env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp_millis()
        .try_init()
    {
        Ok(()) => Mmh3Status::Mmh3Ok,
        Err(_) => Mmh3Status::Mmh3OperationFailed, // Already initialized
    }
}

/// Initialize mmh3 logging with custom filter string
///
/// # Safety
/// - `filter` must be a valid null-terminated C string or NULL.
///
/// # Arguments
/// * `filter` - Log filter string (e.g., "mmh3=debug,info")
///
/// # Returns
/// `Mmh3Ok` on success
#[no_mangle]
pub unsafe extern "C" fn mmh3_logging_init_with_filter(filter: *const c_char) -> Mmh3Status {
    if filter.is_null() {
        return Mmh3Status::Mmh3InvalidArgument;
    }
    let Ok(filter) = CStr::from_ptr(filter).to_str() else {
        return Mmh3Status::Mmh3InvalidArgument;
    };

    match env_logger::Builder::new().parse_filters(filter).try_init() {
        Ok(()) => Mmh3Status::Mmh3Ok,
        Err(_) => Mmh3Status::Mmh3OperationFailed,
    }
}
