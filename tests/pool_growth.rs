// Testable Property 4: the slot table grows (and never shrinks) when more
// concurrent tasks are submitted than the initial capacity provides.

use std::sync::{Arc, Barrier};

use tholder::Pool;

#[test]
fn capacity_grows_under_concurrent_load() {
    const INITIAL: usize = 2;
    const CONCURRENT: usize = 6;

    let pool = Pool::new(INITIAL).expect("valid pool");
    assert_eq!(pool.capacity(), INITIAL);

    // Hold every task on a barrier so all CONCURRENT slots are occupied at
    // once, forcing growth past INITIAL.
    let barrier = Arc::new(Barrier::new(CONCURRENT));
    let handles: Vec<_> = (0..CONCURRENT)
        .map(|_| {
            let b = Arc::clone(&barrier);
            pool.submit(move |()| b.wait(), ()).expect("submit succeeds")
        })
        .collect();

    for handle in handles {
        handle.join().expect("no panic");
    }

    assert!(pool.capacity() >= CONCURRENT);
}

#[test]
fn capacity_never_shrinks_after_tasks_complete() {
    let pool = Pool::new(1).expect("valid pool");
    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let b = Arc::clone(&barrier);
            pool.submit(move |()| b.wait(), ()).expect("submit succeeds")
        })
        .collect();
    for handle in handles {
        handle.join().expect("no panic");
    }
    let grown = pool.capacity();
    assert!(grown >= 4);

    // Submitting one more task after everything has quiesced must not
    // reduce capacity.
    pool.submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");
    assert_eq!(pool.capacity(), grown);
}
