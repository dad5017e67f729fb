//! The counter contract and its implementations.
//!
//! Each implementation stores one integer, initially zero, and differs from
//! the others only in the concurrency discipline applied to that integer.
//! They are interchangeable on purpose: everything that drives a counter
//! does so through the [`Counter`] trait, never through a concrete type.

mod atomic_counter;
mod mutex_counter;
mod racy_counter;

pub use self::atomic_counter::AtomicCounter;
pub use self::mutex_counter::MutexCounter;
pub use self::racy_counter::RacyCounter;

use static_assertions::assert_impl_all;

/// A shared counter with three total operations.
///
/// [`increment`](Counter::increment) adds exactly one,
/// [`count`](Counter::count) reads the value as currently observed, and
/// [`reset`](Counter::reset) stores zero. None of them take arguments or
/// return errors.
///
/// Implementations are `Sync` so one instance can be driven from many
/// threads. For [`MutexCounter`] and [`AtomicCounter`] that carries a
/// correctness guarantee: N increments from any number of threads are
/// observed as exactly N, an increment completed on one thread is visible
/// to a later `count` on another, and a `reset` racing with increments
/// leaves either zero or zero plus the increments applied after it.
/// [`RacyCounter`] makes no such promise; sharing it is how the lost-update
/// anomaly gets demonstrated.
pub trait Counter: Sync {
    /// Increase the stored value by exactly one.
    fn increment(&self);

    /// Return the value as currently observed.
    fn count(&self) -> usize;

    /// Store zero.
    fn reset(&self);
}

// Shareability is part of the contract for all three implementations,
// including the racy one. Pin it down at compile time.
assert_impl_all!(RacyCounter: Send, Sync);
assert_impl_all!(MutexCounter: Send, Sync);
assert_impl_all!(AtomicCounter: Send, Sync);
