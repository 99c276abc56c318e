//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

/// Default number of resident entries before LRU eviction begins.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of resident entries before LRU eviction begins
    pub cache_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum resident entries (default: 1024)
    ///
    /// Unparsable or non-positive values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v: &usize| v > 0)
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
