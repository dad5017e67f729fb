use std::cell::UnsafeCell;

use super::Counter;

/// A counter with no synchronization at all.
///
/// The value lives in a plain [`UnsafeCell`] and every access goes straight
/// through the raw pointer. [`increment`](Counter::increment) is a split
/// read-modify-write: read the current value, add one, write the sum back.
/// Nothing stops two threads from reading the same stale value and writing
/// the same sum, so under concurrent use the final count is at most, and
/// usually well below, the number of increments performed. This is the
/// classic lost-update anomaly.
///
/// The anomaly is the entire point of the type. It is the baseline the
/// synchronized implementations are measured against, so it must stay
/// unguarded; a mutex or even a relaxed atomic would change what the
/// baseline shows. Concurrent use is a genuine data race and therefore
/// undefined behavior in the strict sense. The type is only `Sync` so that
/// race can be staged deliberately. Single-threaded use is sound and
/// behaves like a plain integer.
pub struct RacyCounter {
    value: UnsafeCell<usize>,
}

// SAFETY: not actually safe. The type is not thread safe in any way; the
// assertion exists so a shared instance can be raced on purpose. See the
// type-level docs.
unsafe impl Sync for RacyCounter {}

impl RacyCounter {
    pub const fn new() -> Self {
        RacyCounter {
            value: UnsafeCell::new(0),
        }
    }
}

impl Default for RacyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter for RacyCounter {
    fn increment(&self) {
        // Deliberately two steps with a window between them. Do not collapse
        // this into anything atomic; losing updates under contention is the
        // behavior this type exists to show.
        let current = unsafe { *self.value.get() };
        unsafe { *self.value.get() = current + 1 };
    }

    fn count(&self) -> usize {
        unsafe { *self.value.get() }
    }

    fn reset(&self) {
        unsafe { *self.value.get() = 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(RacyCounter::new().count(), 0);
    }

    #[test]
    fn sequential_increments_are_exact() {
        let counter = RacyCounter::new();
        for _ in 0..1000 {
            counter.increment();
        }
        assert_eq!(counter.count(), 1000);
    }

    #[test]
    fn reset_clears_the_value() {
        let counter = RacyCounter::new();
        for _ in 0..10 {
            counter.increment();
        }
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
