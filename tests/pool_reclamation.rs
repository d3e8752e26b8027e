// Testable Property 5 / Scenario S3: a parked worker that receives no new
// task within the configured idle timeout exits, and a later submission to
// that slot spawns a fresh worker thread rather than finding the old one
// still parked.

use std::thread;
use std::time::Duration;

use tholder::{Pool, PoolConfig};

#[test]
fn idle_worker_is_reclaimed_and_slot_reused() {
    let config = PoolConfig::new(1).with_idle_timeout(Duration::from_millis(30));
    let pool = Pool::with_config(config).expect("valid pool");

    pool.submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");
    assert_eq!(pool.workers_spawned(), 1);

    // Give the lone worker time to hit its idle deadline and exit.
    thread::sleep(Duration::from_millis(150));

    pool.submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");
    assert_eq!(
        pool.workers_spawned(),
        2,
        "a second worker thread should have been spawned after the first idled out"
    );
}

#[test]
fn task_within_idle_window_reuses_worker() {
    let config = PoolConfig::new(1).with_idle_timeout(Duration::from_millis(500));
    let pool = Pool::with_config(config).expect("valid pool");

    pool.submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");
    thread::sleep(Duration::from_millis(20));
    pool.submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");

    assert_eq!(pool.workers_spawned(), 1);
}
