//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment
//! variables.

use std::env;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of map slots to pre-allocate
    pub initial_capacity: usize,
    /// Maximum number of entries before LRU eviction kicks in
    pub max_capacity: usize,
    /// Default TTL in seconds for entries inserted without an explicit TTL
    pub default_ttl: u64,
    /// Reaper sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `INITIAL_CAPACITY` - Pre-allocated map slots (default: 16)
    /// - `MAX_CAPACITY` - Maximum cache entries (default: 1024)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Reaper sweep interval in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            initial_capacity: env::var("INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(16),
            max_capacity: env::var("MAX_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Rejects configurations the cache cannot run with.
    ///
    /// A zero maximum capacity would evict every insert immediately and a
    /// zero default TTL would make plain `set` calls unusable; both are
    /// startup errors rather than latent runtime surprises.
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        if self.default_ttl == 0 {
            return Err(CacheError::InvalidTtl(0));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_capacity: 1024,
            default_ttl: 300,
            sweep_interval: 60,
        }
    }
}
