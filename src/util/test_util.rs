//! Helpers shared by unit and integration tests.
//!
//! These are compiled into the library rather than a test module so the
//! integration tests and benches can reach them too.

use std::panic;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Run `f` on another thread and panic if it has not finished within
/// `millis`. A deadlocked or livelocked test then fails instead of hanging
/// the whole suite.
// https://github.com/rust-lang/rfcs/issues/2798#issuecomment-552949300
pub fn panic_after<T, F>(millis: u64, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T,
    F: Send + 'static,
{
    let (done_tx, done_rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let val = f();
        done_tx.send(()).expect("Unable to send completion signal");
        val
    });

    match done_rx.recv_timeout(Duration::from_millis(millis)) {
        Ok(_) => handle.join().expect("Thread panicked"),
        Err(e) => panic!("Thread took too long: {}", e),
    }
}

lazy_static! {
    static ref SERIAL_TEST_LOCK: Mutex<()> = Mutex::default();
}

/// Force some tests to be executed serially. Tests that mutate process-wide
/// state, such as environment variables, or that time concurrent execution
/// must not overlap with the rest of the suite.
pub fn serial_test<F>(f: F)
where
    F: FnOnce(),
{
    // Hold the lock through a poisoning panic as well; the Err variant
    // still owns the guard.
    let _lock = SERIAL_TEST_LOCK.lock();
    f();
}

/// Always execute a cleanup closure no matter whether the test panics or not.
pub fn with_cleanup<T, C>(test: T, cleanup: C)
where
    T: FnOnce() + panic::UnwindSafe,
    C: FnOnce(),
{
    let res = panic::catch_unwind(test);
    cleanup();
    if let Err(e) = res {
        panic::resume_unwind(e);
    }
}
