//! Pool-construction constants and configuration.
//!
//! Migrated from the constants embedded directly in `tholder.c` (there is no
//! separate config header in the source — `DEFAULT_MAX_THREADS` and the 1
//! second idle-wait deadline are hardcoded at their use sites). This module
//! pulls them out into one place and makes the idle timeout a
//! construction-time parameter instead of a hardcoded constant, so callers
//! can tune it without touching the pool implementation.

use std::time::Duration;

/// Default slot table capacity used when a pool is lazily created without an
/// explicit `init` call. Equivalent to `DEFAULT_MAX_THREADS` in `tholder.h`.
pub const DEFAULT_CAPACITY: usize = 8;

/// Default idle timeout before a parked worker self-terminates.
///
/// `tholder.c`'s `auxiliary_function` computes its deadline as
/// `clock_gettime(...); timeout.tv_sec += 1;` — one second. This crate
/// follows that literal source constant.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Construction-time parameters for a [`crate::Pool`].
///
/// # Examples
///
/// ```
/// use tholder::PoolConfig;
/// use std::time::Duration;
///
/// let cfg = PoolConfig::new(16).with_idle_timeout(Duration::from_millis(50));
/// assert_eq!(cfg.capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Initial slot table capacity. Must be greater than zero.
    pub capacity: usize,
    /// How long a parked worker waits for new work before exiting.
    pub idle_timeout: Duration,
}

impl PoolConfig {
    /// Build a config with the given capacity and the default idle timeout.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }

    /// Override the idle timeout.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
