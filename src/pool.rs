//! [`Pool`]: an independently instantiable thread pool.
//!
//! Equivalent to the process-wide globals in `tholder.c`
//! (`thread_pool` / `thread_pool_size` / `pthread_calls`) turned into a
//! value with an explicit lifetime. [`crate::init`] / [`crate::submit`] /
//! [`crate::destroy`] are thin wrappers over one such `Pool` held in
//! process-wide storage (see `global.rs`); nothing stops a caller from
//! creating as many independent `Pool`s as it wants instead.

use std::sync::Arc;
use std::thread;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::{make_job, JoinHandle};
use crate::slot::SlotState;
use crate::table::SlotTable;
use crate::worker;

/// A bounded, dynamically-resizable pool of worker threads that multiplexes
/// short-lived tasks onto long-lived slots.
///
/// See the crate-level docs for the full component model. Dropping a `Pool`
/// only releases this value's reference to its slot table; slots whose
/// workers are still running outlive the `Pool` handle until those workers
/// exit on their own (there is no teardown step that joins every worker —
/// callers are expected to ensure the pool is quiescent first).
pub struct Pool {
    table: Arc<SlotTable>,
    idle_timeout: std::time::Duration,
}

impl Pool {
    /// Create a pool with the given initial slot table capacity and the
    /// default idle timeout. Equivalent to `tholder_init(capacity)`.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, PoolError> {
        Self::with_config(PoolConfig::new(capacity))
    }

    /// Create a pool with explicit configuration.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidCapacity`] if `config.capacity` is zero.
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        if config.capacity == 0 {
            return Err(PoolError::InvalidCapacity);
        }
        Ok(Self {
            table: Arc::new(SlotTable::with_capacity(config.capacity)),
            idle_timeout: config.idle_timeout,
        })
    }

    /// Current slot table capacity (grows over time; never shrinks).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of worker OS threads spawned over this pool's lifetime.
    /// Equivalent to the source's `pthread_calls` / `workers_spawned`
    /// diagnostic counter.
    #[must_use]
    pub fn workers_spawned(&self) -> usize {
        self.table.workers_spawned()
    }

    /// Submit a task for execution and return a handle to its eventual
    /// result. Equivalent to `tholder_create`.
    ///
    /// `function` is invoked with `argument` on a worker thread; a worker
    /// already parked on a slot is reused when available, otherwise a new
    /// worker thread is spawned. Submission never blocks on task execution
    /// — only briefly on slot-table growth or a slot's `data_lock`, both
    /// uncontended in the common case.
    ///
    /// # Errors
    /// Returns [`PoolError::SpawnFail`] if a new worker thread is needed and
    /// the OS refuses to create it; the reserved slot is released before the
    /// error is returned, so the pool remains usable and the caller may
    /// retry.
    pub fn submit<F, A, R>(&self, function: F, argument: A) -> Result<JoinHandle<R>, PoolError>
    where
        F: FnOnce(A) -> R + Send + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let (handle, completion) = JoinHandle::new();
        let (slot, had_worker) = self.table.acquire();
        tracing::trace!(index = slot.index, had_worker, "task submitted");

        let job = make_job(function, argument, completion);
        {
            let mut guard = slot.job.lock();
            *guard = Some(job);
        }

        if had_worker {
            // An existing worker is parked on this slot; wake it. Taking the
            // same `wait_lock` the worker checks its condition under closes
            // the lost-wakeup window — see worker.rs's
            // `park_until_task_or_timeout`.
            let _guard = slot.wait_lock.lock();
            slot.work_cv.notify_all();
        } else {
            let idle_timeout = self.idle_timeout;
            let slot_for_worker = Arc::clone(&slot);
            let spawned = thread::Builder::new()
                .name(format!("tholder-worker-{}", slot.index))
                .spawn(move || worker::run(slot_for_worker, idle_timeout));

            match spawned {
                Ok(thread_handle) => {
                    self.table.record_worker_spawned();
                    *slot.worker_thread.lock() = Some(thread_handle);
                }
                Err(io_err) => {
                    // Roll the reservation back: discard the stored job and
                    // release the slot before returning the error, so the
                    // pool remains usable for a retry.
                    slot.job.lock().take();
                    slot.state
                        .compare_exchange(SlotState::Busy, SlotState::Empty)
                        .expect("no other thread can touch a slot this caller just reserved");
                    return Err(PoolError::SpawnFail(io_err));
                }
            }
        }

        Ok(handle)
    }
}

impl Default for Pool {
    /// A pool with [`crate::config::DEFAULT_CAPACITY`] slots and the default
    /// idle timeout. Building one cannot fail (`DEFAULT_CAPACITY` is
    /// nonzero), so this panics only if that invariant is ever broken.
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        Self::new(crate::config::DEFAULT_CAPACITY).expect("DEFAULT_CAPACITY is always nonzero")
    }
}
