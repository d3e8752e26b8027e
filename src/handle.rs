//! The Join handle: the caller-side rendezvous object for one submitted
//! task's eventual result.
//!
//! Equivalent to the `tholder_t` handle returned by `tholder_create`, which
//! in the source is secretly an integer index into the global table. Here it
//! is an owned value carrying a typed result instead of an index a caller
//! has to hand back to look anything up.

use std::sync::{Arc, Weak};

use parking_lot::{Condvar, Mutex};

use crate::error::JoinError;

/// What a task produced: its value, or a description of why it panicked.
enum TaskOutcome<R> {
    Completed(R),
    Faulted(String),
}

enum CompletionState<R> {
    Pending,
    Done(TaskOutcome<R>),
}

/// The one-shot signal a [`JoinHandle`] and the worker running its task
/// rendezvous through. Equivalent to the mutex-as-latch trick in the source,
/// but holding a typed result instead of nothing.
pub(crate) struct Completion<R> {
    state: Mutex<CompletionState<R>>,
    ready: Condvar,
}

impl<R> Completion<R> {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(CompletionState::Pending),
            ready: Condvar::new(),
        })
    }

    fn complete(&self, outcome: TaskOutcome<R>) {
        let mut state = self.state.lock();
        *state = CompletionState::Done(outcome);
        self.ready.notify_all();
    }
}

/// The caller-side handle for one submitted task. Equivalent to `tholder_t`.
///
/// Move-only, and [`join`](JoinHandle::join) consumes it by value: a second
/// call on the same handle is a compile error, so there is no runtime
/// "double join" error kind here — Rust's ownership model rules it out
/// statically instead of needing a runtime check.
#[must_use = "a submitted task's result is dropped if its handle is never joined"]
pub struct JoinHandle<R> {
    completion: Arc<Completion<R>>,
}

impl<R> JoinHandle<R> {
    pub(crate) fn new() -> (Self, Weak<Completion<R>>) {
        let completion = Completion::new();
        let weak = Arc::downgrade(&completion);
        (Self { completion }, weak)
    }

    /// Block until the task completes, then return its result.
    ///
    /// Equivalent to a blocking wait on `tholder_t`'s underlying mutex in the
    /// source, generalized to a typed result. Returns
    /// [`JoinError::TaskFault`] if the task panicked instead of returning
    /// normally.
    pub fn join(self) -> Result<R, JoinError> {
        let mut state = self.completion.state.lock();
        loop {
            match &*state {
                CompletionState::Pending => self.completion.ready.wait(&mut state),
                CompletionState::Done(_) => break,
            }
        }
        match std::mem::replace(&mut *state, CompletionState::Pending) {
            CompletionState::Done(TaskOutcome::Completed(value)) => Ok(value),
            CompletionState::Done(TaskOutcome::Faulted(msg)) => Err(JoinError::TaskFault(msg)),
            CompletionState::Pending => unreachable!("loop above only exits once Done"),
        }
    }
}

/// Build the boxed, type-erased [`crate::slot::Job`] for one task.
///
/// The closure captures `function`, `argument`, and a weak reference to the
/// handle's `Completion` directly — collapsing the source's separate
/// `function` / `argument` / `output_ref` fields into the single `Job` field
/// `Slot::job` holds. If the `JoinHandle` was dropped before the task ran
/// (abandoned), `upgrade` fails and the result is silently discarded, which
/// is what a *weak* reference to the handle is for.
pub(crate) fn make_job<F, A, R>(function: F, argument: A, completion: Weak<Completion<R>>) -> Box<dyn FnOnce() + Send>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Box::new(move || {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| function(argument)));
        if let Some(completion) = completion.upgrade() {
            match outcome {
                Ok(value) => completion.complete(TaskOutcome::Completed(value)),
                Err(payload) => completion.complete(TaskOutcome::Faulted(panic_message(&payload))),
            }
        }
        // If upgrade failed, the outcome (including any panic) is simply
        // dropped here instead of propagating — the worker loop in
        // worker.rs already wraps this whole closure in its own
        // `catch_unwind`, so a panic that couldn't be delivered still
        // cannot escape and take the worker thread down.
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked with a non-string payload".to_owned()
    }
}
