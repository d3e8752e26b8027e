// Integration tests for the process-wide free-function surface
// (init / submit / destroy / workers_spawned). Serialized with
// `serial_test` since every test shares the same process-wide pool.

use serial_test::serial;
use tholder::{self, PoolError};

#[test]
#[serial]
fn submit_without_init_lazily_creates_the_default_pool() {
    tholder::destroy();
    let handle = tholder::submit(|n: u32| n + 1, 1).expect("submit succeeds");
    assert_eq!(handle.join().expect("no panic"), 2);
    assert_eq!(tholder::workers_spawned(), 1);
    tholder::destroy();
}

#[test]
#[serial]
fn explicit_init_is_honored_by_subsequent_submits() {
    tholder::destroy();
    tholder::init(3).expect("valid capacity");
    let handle = tholder::submit(|s: &str| s.len(), "hello").expect("submit succeeds");
    assert_eq!(handle.join().expect("no panic"), 5);
    tholder::destroy();
}

#[test]
#[serial]
fn init_rejects_zero_capacity() {
    tholder::destroy();
    assert!(matches!(tholder::init(0), Err(PoolError::InvalidCapacity)));
    tholder::destroy();
}

#[test]
#[serial]
fn destroy_is_a_harmless_no_op_when_never_initialized() {
    tholder::destroy();
    tholder::destroy();
    assert_eq!(tholder::workers_spawned(), 0);
}

#[test]
#[serial]
fn destroy_then_submit_lazily_reinitializes() {
    tholder::destroy();
    tholder::submit(|()| (), ()).expect("submit succeeds").join().expect("no panic");
    tholder::destroy();
    // Submitting after destroy does not error — it simply starts a fresh
    // default pool.
    let handle = tholder::submit(|()| 7u32, ()).expect("submit succeeds");
    assert_eq!(handle.join().expect("no panic"), 7);
    tholder::destroy();
}
