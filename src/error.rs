//! Error types for the local cache
//!
//! Provides unified error handling using thiserror.
//!
//! The error surface is deliberately small: capacity pressure is handled by
//! silent LRU eviction and a missing key yields `None`, so neither is an error.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the local cache.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// A zero TTL was supplied where a positive one is required
    #[error("Invalid TTL: {0} (TTL must be at least one second)")]
    InvalidTtl(u64),

    /// The cache was configured with a maximum capacity of zero
    #[error("Invalid capacity: max_capacity must be greater than zero")]
    InvalidCapacity,
}

// == Result Type Alias ==
/// Convenience Result type for the local cache.
pub type Result<T> = std::result::Result<T, CacheError>;
