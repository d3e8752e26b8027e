// Scenario S4: many callers submit and join concurrently against one
// shared pool. Each caller thread runs its own submit+join loop; the pool
// itself must not serialize or corrupt results across callers.

use std::sync::Arc;
use std::thread;

use tholder::Pool;

#[test]
fn concurrent_callers_submit_and_join_without_cross_talk() {
    const CALLERS: usize = 4;
    const ROUNDS: usize = 2_000;

    let pool = Arc::new(Pool::new(4).expect("valid pool"));

    let callers: Vec<_> = (0..CALLERS)
        .map(|caller_id| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    let expected = caller_id * 1_000_000 + round;
                    let handle = pool
                        .submit(move |n: usize| n, expected)
                        .expect("submit succeeds");
                    assert_eq!(handle.join().expect("no panic"), expected);
                }
            })
        })
        .collect();

    for caller in callers {
        caller.join().expect("caller thread does not panic");
    }
}
