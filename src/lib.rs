//! Contend is a testbed for synchronization strategies on a shared counter.
//!
//! The crate provides a small [`Counter`] contract (increment, read, reset)
//! and three implementations that differ only in the discipline applied to
//! the shared value:
//!
//! * [`RacyCounter`]: no synchronization at all. Concurrent increments race
//!   and lose updates; the type exists so that anomaly can be staged and
//!   observed.
//! * [`MutexCounter`]: every operation inside a mutex critical section.
//! * [`AtomicCounter`]: lock-free fetch-and-add on an atomic word.
//!
//! The [`harness`] module drives identical workloads against any
//! implementation and reports the observed count and the elapsed wall-clock
//! time, which callers compare against the `workers * increments_per_worker`
//! oracle. See [`harness::run`] for the staging protocol.
//!
//! Workload sizes for the benches can be overridden through `CONTEND_`
//! environment variables; see [`util::options`].

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod counter;
pub mod harness;
pub mod util;

pub use crate::counter::{AtomicCounter, Counter, MutexCounter, RacyCounter};
pub use crate::harness::{Trial, Workload};
