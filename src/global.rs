//! The process-wide free-function surface: `init` / `submit` / `destroy` /
//! `workers_spawned`.
//!
//! Equivalent to `tholder_init` / `tholder_create` and the global
//! `thread_pool` / `thread_pool_mutex` in `tholder.c`, here backed by one
//! lazily-initialized [`Pool`] behind a `parking_lot::RwLock`. Every function
//! here is a thin wrapper over one such [`Pool`]; callers who want many
//! independent pools instead can just construct [`Pool`] values directly.

use parking_lot::RwLock;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::JoinHandle;
use crate::pool::Pool;

static POOL: RwLock<Option<Pool>> = RwLock::new(None);

/// Explicitly initialize the process-wide pool with the given capacity.
///
/// Equivalent to `tholder_init`. Calling this more than once replaces the
/// existing pool — slots and workers belonging to the previous one are
/// simply dropped from process-wide storage. The source overwrites
/// `thread_pool` and leaks whatever it pointed to; this does the same modulo
/// Rust cleaning up the old `Pool` value's resources instead of leaking them
/// outright.
///
/// # Errors
/// Returns [`PoolError::InvalidCapacity`] if `capacity` is zero.
pub fn init(capacity: usize) -> Result<(), PoolError> {
    init_with_config(PoolConfig::new(capacity))
}

/// Like [`init`], but with explicit [`PoolConfig`].
///
/// # Errors
/// Returns [`PoolError::InvalidCapacity`] if `config.capacity` is zero.
pub fn init_with_config(config: PoolConfig) -> Result<(), PoolError> {
    let pool = Pool::with_config(config)?;
    *POOL.write() = Some(pool);
    Ok(())
}

/// Submit a task to the process-wide pool, lazily initializing it with
/// [`crate::config::DEFAULT_CAPACITY`] if [`init`] was never called.
///
/// Equivalent to `tholder_create` called against the implicit global pool.
///
/// # Errors
/// Returns [`PoolError::SpawnFail`] under the same conditions as
/// [`Pool::submit`].
pub fn submit<F, A, R>(function: F, argument: A) -> Result<JoinHandle<R>, PoolError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    {
        let guard = POOL.read();
        if let Some(pool) = guard.as_ref() {
            return pool.submit(function, argument);
        }
    }
    // No pool yet: upgrade to a write lock and lazily default-construct one.
    // A second caller racing here just re-checks under the write lock and
    // finds the first caller's pool already in place.
    let mut guard = POOL.write();
    if guard.is_none() {
        *guard = Some(Pool::default());
    }
    guard.as_ref().expect("just initialized above").submit(function, argument)
}

/// Tear down the process-wide pool.
///
/// `tholder.c` itself has no teardown function at all — only the demo
/// `main`'s `sleep(2)` before falling off the end — but a library consumer
/// needs an explicit way to release the process-wide pool's resources, so
/// this crate adds one. As in the source, this does not wait for in-flight
/// tasks: callers are responsible for ensuring quiescence first. Calling
/// this when no pool was ever initialized is a harmless no-op.
pub fn destroy() {
    *POOL.write() = None;
}

/// Number of worker OS threads spawned over the process-wide pool's
/// lifetime, or zero if it was never initialized.
#[must_use]
pub fn workers_spawned() -> usize {
    POOL.read().as_ref().map_or(0, Pool::workers_spawned)
}
