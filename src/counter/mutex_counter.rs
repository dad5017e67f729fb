use std::sync::Mutex;

use super::Counter;

/// A counter guarded by a single mutex.
///
/// Every operation holds the lock for its whole critical section, so at most
/// one thread reads or writes the value at any moment and all operations on
/// one instance form a total order. The guard returned by [`Mutex::lock`]
/// releases the lock on every exit path, including unwinding, so no panic
/// can leave the counter locked.
///
/// Locking uses `lock().unwrap()`: a poisoned mutex means some holder
/// panicked mid-update, and the panic is propagated rather than trusting
/// whatever state the holder left behind.
///
/// The price of exactness here is serialization. Under contention every
/// increment pays for a lock hand-off, which is the cost
/// [`AtomicCounter`](super::AtomicCounter) avoids.
pub struct MutexCounter {
    value: Mutex<usize>,
}

impl MutexCounter {
    pub const fn new() -> Self {
        MutexCounter {
            value: Mutex::new(0),
        }
    }
}

impl Default for MutexCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter for MutexCounter {
    fn increment(&self) {
        let mut value = self.value.lock().unwrap();
        *value += 1;
    }

    fn count(&self) -> usize {
        *self.value.lock().unwrap()
    }

    fn reset(&self) {
        *self.value.lock().unwrap() = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(MutexCounter::new().count(), 0);
    }

    #[test]
    fn sequential_increments_are_exact() {
        let counter = MutexCounter::new();
        for _ in 0..1000 {
            counter.increment();
        }
        assert_eq!(counter.count(), 1000);
    }

    #[test]
    fn reset_clears_the_value() {
        let counter = MutexCounter::new();
        for _ in 0..10 {
            counter.increment();
        }
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn concurrent_increments_are_all_observed() {
        let counter = MutexCounter::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10_000 {
                        counter.increment();
                    }
                });
            }
        });
        assert_eq!(counter.count(), 40_000);
    }
}
