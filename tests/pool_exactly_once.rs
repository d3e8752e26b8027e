// Integration tests for exactly-once execution: a submitted task runs
// exactly once, never zero, never more than once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tholder::Pool;

#[test]
fn single_task_runs_exactly_once() {
    let pool = Pool::new(2).expect("valid pool");
    let counter = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&counter);
    let handle = pool
        .submit(move |()| c.fetch_add(1, Ordering::SeqCst), ())
        .expect("submit succeeds");
    handle.join().expect("task does not panic");

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn many_tasks_each_run_exactly_once() {
    const N: usize = 200;
    let pool = Pool::new(4).expect("valid pool");
    let counter = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let c = Arc::clone(&counter);
            pool.submit(move |()| c.fetch_add(1, Ordering::SeqCst), ())
                .expect("submit succeeds")
        })
        .collect();

    for handle in handles {
        handle.join().expect("task does not panic");
    }

    assert_eq!(counter.load(Ordering::SeqCst), N);
}
