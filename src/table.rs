//! The slot table: an ordered, lazily-populated, growable sequence of
//! [`Slot`]s addressed by index.
//!
//! Equivalent to the `thread_pool` array and `thread_pool_size` in
//! `tholder.c`, plus `tholder_init` / `get_inactive_index`'s growth path.
//! `pool_lock` here guards table growth and teardown only, the same role the
//! source's `thread_pool_mutex` plays; per-slot lazy allocation instead uses
//! a `OnceLock` per entry so that creating slot *i* never blocks a concurrent
//! acquisition touching slot *j* — a narrower critical section than the
//! source's single table-wide lock around every slot's `calloc`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};

use crate::slot::Slot;

/// A growable table entry: absent until the first acquisition scan reaches
/// it, at which point exactly one caller wins the race to populate it.
struct SlotEntry {
    slot: OnceLock<Arc<Slot>>,
}

impl SlotEntry {
    fn absent() -> Arc<Self> {
        Arc::new(Self {
            slot: OnceLock::new(),
        })
    }

    fn get_or_create(&self, index: usize) -> Arc<Slot> {
        Arc::clone(self.slot.get_or_init(|| Slot::new(index)))
    }
}

pub(crate) struct SlotTable {
    entries: RwLock<Vec<Arc<SlotEntry>>>,
    /// Guards table growth and teardown only — never held across a slot's
    /// `data_lock` or while a task runs. Equivalent to `thread_pool_mutex`.
    pool_lock: Mutex<()>,
    workers_spawned: AtomicUsize,
}

impl SlotTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let entries = (0..capacity).map(|_| SlotEntry::absent()).collect();
        Self {
            entries: RwLock::new(entries),
            pool_lock: Mutex::new(()),
            workers_spawned: AtomicUsize::new(0),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn workers_spawned(&self) -> usize {
        self.workers_spawned.load(Ordering::Relaxed)
    }

    pub(crate) fn record_worker_spawned(&self) {
        self.workers_spawned.fetch_add(1, Ordering::Relaxed);
    }

    /// Double the table's capacity, unless another thread already grew it
    /// past `at_least`. Equivalent to the growth branch of
    /// `get_inactive_index` in `tholder.c`: "Doubling is idempotent under
    /// the lock: if another thread grew it first, no action."
    fn grow(&self, at_least: usize) {
        let _guard = self.pool_lock.lock();
        let mut entries = self.entries.write();
        if entries.len() >= at_least {
            return;
        }
        let new_len = (entries.len() * 2).max(at_least);
        tracing::debug!(old_len = entries.len(), new_len, "growing slot table");
        entries.resize_with(new_len, SlotEntry::absent);
    }

    fn entry_at(&self, index: usize) -> Option<Arc<SlotEntry>> {
        self.entries.read().get(index).cloned()
    }

    /// Linear-probe from index 0 for a slot whose state transitions to
    /// `Busy` by this call, growing the table when the scan runs off the
    /// end. Equivalent to `get_inactive_index`.
    ///
    /// Returns the acquired slot and whether it already had a live worker
    /// (see [`Slot::try_reserve`]).
    pub(crate) fn acquire(self: &Arc<Self>) -> (Arc<Slot>, bool) {
        let mut index = 0usize;
        loop {
            let entry = match self.entry_at(index) {
                Some(entry) => entry,
                None => {
                    self.grow(index + 1);
                    continue;
                }
            };
            let slot = entry.get_or_create(index);
            if let Some(had_worker) = slot.try_reserve() {
                return (slot, had_worker);
            }
            index += 1;
        }
    }
}
