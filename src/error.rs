//! Error types returned by pool construction, submission, and join.
//!
//! Plain hand-written enums with manual `Display` / `Error` impls, following
//! the same idiom as the `Lz4Error` / `Lz4FError` enums in `jafreck-lz4r`'s
//! `src/lib.rs`, rather than pulling in a derive-macro error crate.

use std::fmt;
use std::io;

/// Errors surfaced by [`crate::Pool::new`], [`crate::Pool::with_config`], and
/// [`crate::Pool::submit`].
///
/// `tholder.c` treats both conditions as fatal (`calloc`/`malloc` failures
/// are unchecked, and `pthread_create` failure is ignored); this crate
/// surfaces both as typed errors instead so callers can decide how to
/// respond.
#[derive(Debug)]
pub enum PoolError {
    /// `init`/`with_config` was called with a zero capacity.
    InvalidCapacity,
    /// Allocating the slot table or a join handle failed.
    AllocFail,
    /// The underlying OS thread could not be created for a new worker.
    ///
    /// The reserved slot is rolled back to `Empty` before this is returned,
    /// so the caller may retry `submit` or give up; the pool remains usable.
    SpawnFail(io::Error),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidCapacity => write!(f, "pool capacity must be greater than zero"),
            PoolError::AllocFail => write!(f, "failed to allocate pool resources"),
            PoolError::SpawnFail(e) => write!(f, "failed to spawn worker thread: {e}"),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoolError::SpawnFail(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors returned by [`crate::JoinHandle::join`].
///
/// A naive port might also need a `DoubleJoin` variant for calling `join`
/// twice on the same handle. In this crate `join` consumes `self` by value,
/// so a second call is a compile error rather than a runtime condition —
/// there is no `DoubleJoin` variant because there is nothing left to detect.
#[derive(Debug, Clone)]
pub enum JoinError {
    /// The task panicked. The payload is converted to a displayable message;
    /// the worker thread that ran it did not unwind and remains usable for
    /// the slot's next task.
    TaskFault(String),
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::TaskFault(msg) => write!(f, "task panicked: {msg}"),
        }
    }
}

impl std::error::Error for JoinError {}
