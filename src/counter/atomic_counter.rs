use std::sync::atomic::{AtomicUsize, Ordering};

use super::Counter;

/// A lock-free counter on an atomic machine word.
///
/// [`increment`](Counter::increment) is a single hardware fetch-and-add.
/// Two concurrent increments can never observe the same pre-update value,
/// so every increment is counted exactly once and no thread ever blocks;
/// under contention a core may stall on cache-line ownership, but there is
/// no lock hand-off and no parked thread to wake.
///
/// All accesses use [`SeqCst`](Ordering::SeqCst). The contract wants an
/// increment completed on one thread to be visible to a later `count` on
/// another, and next to a contended fetch-and-add the stronger ordering is
/// not where the cycles go.
pub struct AtomicCounter {
    value: AtomicUsize,
}

impl AtomicCounter {
    pub const fn new() -> Self {
        AtomicCounter {
            value: AtomicUsize::new(0),
        }
    }
}

impl Default for AtomicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter for AtomicCounter {
    fn increment(&self) {
        let old = self.value.fetch_add(1, Ordering::SeqCst);
        debug_assert!(old != usize::MAX, "counter wrapped around");
    }

    fn count(&self) -> usize {
        self.value.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.value.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(AtomicCounter::new().count(), 0);
    }

    #[test]
    fn sequential_increments_are_exact() {
        let counter = AtomicCounter::new();
        for _ in 0..1000 {
            counter.increment();
        }
        assert_eq!(counter.count(), 1000);
    }

    #[test]
    fn reset_clears_the_value() {
        let counter = AtomicCounter::new();
        for _ in 0..10 {
            counter.increment();
        }
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn concurrent_increments_are_all_observed() {
        let counter = AtomicCounter::new();
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
