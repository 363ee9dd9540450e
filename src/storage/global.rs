//! Process-wide option registry
//!
//! The registry is created lazily on first access, with all defaults in
//! place, and lives for the rest of the process. Writes belong to the
//! configuration phase (argument parsing, programmatic overrides); once
//! solving starts, components only read.

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Options;

static OPTIONS: LazyLock<RwLock<Options>> = LazyLock::new(|| RwLock::new(Options::new()));

/// Returns the process-wide registry; every call yields the same instance
#[inline]
pub fn global() -> &'static RwLock<Options> {
    &OPTIONS
}

/// Shared read access to the process-wide registry
pub fn read_global() -> RwLockReadGuard<'static, Options> {
    // Options holds plain values, so a panicked writer cannot leave it torn
    OPTIONS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive write access to the process-wide registry
pub fn write_global() -> RwLockWriteGuard<'static, Options> {
    OPTIONS.write().unwrap_or_else(PoisonError::into_inner)
}
