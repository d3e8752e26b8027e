//! `tholder`: a bounded, dynamically-growable thread pool that reuses idle
//! worker threads across short-lived tasks.
//!
//! Descended from a small pthreads pool (`tholder.c`): a fixed-capacity
//! table of "slots", each of which lazily spawns a dedicated worker thread
//! the first time it is needed and keeps that thread parked between tasks
//! until it has been idle for [`config::DEFAULT_IDLE_TIMEOUT`], at which
//! point the thread exits and its slot becomes available for a fresh worker.
//!
//! Two ways to use it:
//!
//! - Create your own [`Pool`] and call [`Pool::submit`] on it, for
//!   independent pools with their own lifetime.
//! - Use the process-wide free functions ([`init`], [`submit`], [`destroy`],
//!   [`workers_spawned`]), which lazily default-construct one pool behind a
//!   process-wide lock — closer to the source's single implicit global pool.
//!
//! ```
//! use tholder::Pool;
//!
//! let pool = Pool::new(4).unwrap();
//! let handle = pool.submit(|n: u32| n * n, 7);
//! assert_eq!(handle.unwrap().join().unwrap(), 49);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod global;
mod handle;
mod pool;
mod slot;
mod table;
mod worker;

pub use config::{PoolConfig, DEFAULT_CAPACITY, DEFAULT_IDLE_TIMEOUT};
pub use error::{JoinError, PoolError};
pub use global::{destroy, init, init_with_config, submit, workers_spawned};
pub use handle::JoinHandle;
pub use pool::Pool;
