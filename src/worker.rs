//! The worker loop: the body every spawned OS thread runs, parameterized by
//! the single [`Slot`] it is bound to for its entire lifetime.
//!
//! Equivalent to `auxiliary_function` in `tholder.c`. The original's
//! Running / Parked / Exiting state machine is preserved; what changes is
//! how the race between "worker about to exit on timeout" and "submitter
//! about to hand off a new task" is resolved — here it's one
//! `compare_exchange` instead of the source's `has_task`/`has_thread` flag
//! dance, which is the trickiest part of the original design to get right.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::slot::{Slot, SlotState};

/// Run the worker state machine for `slot` until it idles out.
///
/// Equivalent to `auxiliary_function`. Entered directly in the Running
/// state: the caller (submission path) only spawns a worker after already
/// storing its first Job and setting the slot `Busy`, so there is never a
/// "wake up and find nothing to do" first iteration.
pub(crate) fn run(slot: Arc<Slot>, idle_timeout: Duration) {
    tracing::debug!(index = slot.index, "worker starting");
    loop {
        run_job_if_present(&slot);

        match park_until_task_or_timeout(&slot, idle_timeout) {
            ParkOutcome::TaskArrived => continue,
            ParkOutcome::TimedOut => break,
        }
    }
    tracing::debug!(index = slot.index, "worker exiting on idle timeout");
}

/// Running: take the stored Job (if any — a spurious re-entry finds none)
/// under `data_lock`, execute it, deliver the outcome, and mark the slot
/// `Idle`.
fn run_job_if_present(slot: &Arc<Slot>) {
    let job = {
        let mut guard = slot.job.lock();
        guard.take()
    };
    if let Some(job) = job {
        tracing::trace!(index = slot.index, "running task");
        // A faulting task must not unwind the worker thread — `catch_unwind`
        // converts the panic into an outcome the Job closure itself already
        // knows how to deliver to its Completion (see handle.rs).
        if catch_unwind(AssertUnwindSafe(job)).is_err() {
            tracing::warn!(index = slot.index, "task panicked");
        }
        slot.state
            .compare_exchange(SlotState::Busy, SlotState::Idle)
            .expect("slot state cannot change while its own worker holds it Busy");
    }
}

enum ParkOutcome {
    TaskArrived,
    TimedOut,
}

/// Parked: wait on `work_cv` with an absolute deadline, rechecking
/// `SlotState` both before waiting (catches a task that arrived between
/// Running and here) and after every wake (catches spurious wakes and the
/// race against a submitter reserving this slot right as the deadline
/// fires).
fn park_until_task_or_timeout(slot: &Arc<Slot>, idle_timeout: Duration) -> ParkOutcome {
    let deadline = Instant::now() + idle_timeout;
    let mut guard = slot.wait_lock.lock();
    loop {
        if slot.state.load(Ordering::Acquire) == SlotState::Busy {
            return ParkOutcome::TaskArrived;
        }
        let now = Instant::now();
        if now >= deadline {
            // Attempt the Idle -> Empty transition that lets this worker
            // exit. If it fails, a submitter's Idle -> Busy CAS won the
            // race, resolved atomically instead of via lock-release
            // ordering.
            return match slot
                .state
                .compare_exchange(SlotState::Idle, SlotState::Empty)
            {
                Ok(_) => ParkOutcome::TimedOut,
                Err(_) => ParkOutcome::TaskArrived,
            };
        }
        let remaining = deadline - now;
        let result = slot.work_cv.wait_for(&mut guard, remaining);
        if !result.timed_out() && slot.state.load(Ordering::Acquire) == SlotState::Busy {
            return ParkOutcome::TaskArrived;
        }
        // Otherwise loop: either a spurious wake or a timeout, re-check the
        // deadline and state at the top.
    }
}
