//! The `Slot`: one "house" a worker may live in, and the hand-off fields a
//! submitter and that worker use to pass a task back and forth.
//!
//! Equivalent to `thread_args` in `tholder.c`, with the independent
//! `has_thread` / `has_task` atomics replaced by one [`SlotState`] word so
//! that acquisition and worker exit each reduce to a single
//! `compare_exchange` instead of a pair of flags that can be observed in an
//! impossible combination.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

/// A task body plus everything it needs to deliver its result, already bound
/// together as one closure. Replaces the C source's `void (*function)(void*)`
/// + `void* args` pair with an owned closure that already captures its
/// argument and a handle to deliver its result through.
pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

/// The three reachable states of a slot.
///
/// Collapses `has_thread` (is an OS thread alive for this slot?) and
/// `has_task` (is there a task to run or running?) into one word so that
/// acquisition and worker exit are each a single `compare_exchange` instead
/// of two flags that can be observed in an impossible combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum SlotState {
    /// No worker thread, no task. The slot's initial state, and the state a
    /// worker leaves it in just before its thread returns.
    Empty = 0,
    /// A worker thread is alive and parked, waiting for a task.
    Idle = 1,
    /// A worker thread is alive and a task is present (queued or running).
    Busy = 2,
}

impl SlotState {
    const fn encode(self) -> u8 {
        self as u8
    }

    fn decode(raw: u8) -> Self {
        match raw {
            0 => SlotState::Empty,
            1 => SlotState::Idle,
            _ => SlotState::Busy,
        }
    }
}

/// Atomic holder for a [`SlotState`].
#[derive(Debug)]
pub(crate) struct AtomicSlotState(AtomicU8);

impl AtomicSlotState {
    pub(crate) fn new(initial: SlotState) -> Self {
        Self(AtomicU8::new(initial.encode()))
    }

    pub(crate) fn load(&self, order: Ordering) -> SlotState {
        SlotState::decode(self.0.load(order))
    }

    /// Single-attempt CAS; does not retry. Callers that want to retry against
    /// a freshly observed state (like [`Slot::try_reserve`]) loop on the
    /// returned failure value themselves; callers that want to give up and
    /// move on (the worker loop's idle-exit attempt) just inspect the result.
    pub(crate) fn compare_exchange(
        &self,
        current: SlotState,
        new: SlotState,
    ) -> Result<SlotState, SlotState> {
        self.0
            .compare_exchange(
                current.encode(),
                new.encode(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(SlotState::decode)
            .map_err(SlotState::decode)
    }
}

/// One slot in the pool's table. Equivalent to `thread_args` in `tholder.c`.
pub(crate) struct Slot {
    /// Stable identity, used for diagnostics and tests.
    pub(crate) index: usize,
    pub(crate) state: AtomicSlotState,
    /// Guards `job` and sequences hand-off between submitter and worker.
    /// `function` / `argument` / `output_ref` from the data model collapse
    /// into this single field — see the module doc on [`Job`].
    pub(crate) job: Mutex<Option<Job>>,
    /// Pairing for the worker's parked wait. Equivalent to `work_lock` +
    /// `work_cond_var`.
    pub(crate) wait_lock: Mutex<()>,
    pub(crate) work_cv: Condvar,
    /// The worker's OS thread handle, once spawned. Retained inside the slot
    /// instead of discarding it like the source's `pthread_detach`, so tests
    /// can deterministically wait for a worker to actually exit.
    pub(crate) worker_thread: Mutex<Option<std::thread::JoinHandle<()>>>,
}

impl Slot {
    pub(crate) fn new(index: usize) -> Arc<Self> {
        Arc::new(Self {
            index,
            state: AtomicSlotState::new(SlotState::Empty),
            job: Mutex::new(None),
            wait_lock: Mutex::new(()),
            work_cv: Condvar::new(),
            worker_thread: Mutex::new(None),
        })
    }

    /// Attempt to reserve this slot for a new task.
    ///
    /// Returns `Some(true)` if a worker already existed (prior state `Idle`,
    /// caller only needs to notify it), `Some(false)` if the slot was empty
    /// (prior state `Empty`, caller must spawn a worker), or `None` if the
    /// slot is already `Busy` and unavailable.
    ///
    /// Equivalent to the compare-and-exchange step in `get_inactive_index`
    /// (`tholder.c`), generalized to the two states that can transition to
    /// `Busy`. Retries against the state each failed CAS actually observed —
    /// an initial `load` can go stale between being read and the CAS that
    /// follows it (a worker's `Idle -> Empty` idle-exit landing in that
    /// window, for instance), and a slot that is genuinely free right now
    /// must not be skipped just because an earlier read of it wasn't.
    pub(crate) fn try_reserve(&self) -> Option<bool> {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            current = match current {
                SlotState::Busy => return None,
                SlotState::Empty => {
                    match self.state.compare_exchange(SlotState::Empty, SlotState::Busy) {
                        Ok(_) => return Some(false),
                        Err(actual) => actual,
                    }
                }
                SlotState::Idle => {
                    match self.state.compare_exchange(SlotState::Idle, SlotState::Busy) {
                        Ok(_) => return Some(true),
                        Err(actual) => actual,
                    }
                }
            };
        }
    }
}
