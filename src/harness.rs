//! Drives increment workloads against a counter and reports what happened.
//!
//! A [`Workload`] says how many worker threads to launch and how many
//! increments each performs. [`run`] stages it against any [`Counter`]:
//! reset the counter, spawn the workers, release them together through a
//! barrier, join them all, then read the count once. The outcome comes back
//! as a [`Trial`] carrying the observed count and the wall-clock time of the
//! concurrent interval.
//!
//! The harness passes no judgement on the observed count. The synchronized
//! implementations are expected to match [`Workload::expected_count`]
//! exactly and the racy one is expected to fall short under contention, but
//! both expectations belong to the caller.

use std::sync::Barrier;
use std::time::Duration;
use std::time::Instant;

use crate::counter::Counter;

/// The shape of one trial: how many workers, and how hard each one works.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    /// Number of worker threads incrementing one shared counter.
    pub workers: usize,
    /// Number of `increment` calls each worker performs.
    pub increments_per_worker: usize,
}

impl Workload {
    pub const fn new(workers: usize, increments_per_worker: usize) -> Self {
        Workload {
            workers,
            increments_per_worker,
        }
    }

    /// The count a lossless counter reports once the workload has run.
    pub const fn expected_count(&self) -> usize {
        self.workers * self.increments_per_worker
    }
}

/// The outcome of one workload run against one counter instance.
#[derive(Copy, Clone, Debug)]
pub struct Trial {
    /// The workload that was driven.
    pub workload: Workload,
    /// What `count()` returned after the last worker finished.
    pub observed: usize,
    /// Wall-clock time from the moment the workers were released to the
    /// moment the last one finished.
    pub elapsed: Duration,
}

impl Trial {
    /// The oracle: every increment observed exactly once.
    pub fn expected(&self) -> usize {
        self.workload.expected_count()
    }

    /// Whether the counter observed every increment.
    pub fn is_exact(&self) -> bool {
        self.observed == self.expected()
    }

    /// How many increments went missing. Zero for a synchronized counter;
    /// usually positive for the racy one under contention.
    pub fn lost_updates(&self) -> usize {
        self.expected().saturating_sub(self.observed)
    }

    /// Increments performed per second of concurrent execution.
    pub fn increments_per_second(&self) -> f64 {
        self.expected() as f64 / self.elapsed.as_secs_f64()
    }
}

/// Run `workload` against `counter` and report the outcome.
///
/// The counter is reset first, so a fresh instance and a reused one behave
/// the same. No worker increments before all of them are ready: each waits
/// on a barrier, and the clock starts when the barrier releases. The
/// elapsed time in the returned [`Trial`] therefore covers only concurrent
/// execution, not thread spawning, and the count is read once, after every
/// worker has joined.
///
/// A workload with zero workers joins immediately and observes zero. A
/// panicking worker propagates its panic when the thread scope joins.
pub fn run<C: Counter>(counter: &C, workload: Workload) -> Trial {
    let Workload {
        workers,
        increments_per_worker,
    } = workload;
    debug!(
        "Driving {} workers x {} increments against {}",
        workers,
        increments_per_worker,
        short_type_name::<C>()
    );

    counter.reset();

    // Workers plus the thread keeping time.
    let start_gate = Barrier::new(workers + 1);

    let start = std::thread::scope(|scope| {
        for ordinal in 0..workers {
            let start_gate = &start_gate;
            scope.spawn(move || {
                start_gate.wait();
                for _ in 0..increments_per_worker {
                    counter.increment();
                }
                trace!("worker {} finished", ordinal);
            });
        }
        start_gate.wait();
        // Leaving the scope joins every worker, so the elapsed time taken
        // right after covers the whole concurrent interval.
        Instant::now()
    });
    let elapsed = start.elapsed();

    let trial = Trial {
        workload,
        observed: counter.count(),
        elapsed,
    };
    debug!(
        "{}: observed {} of {} expected in {:?}",
        short_type_name::<C>(),
        trial.observed,
        trial.expected(),
        trial.elapsed
    );
    trial
}

/// Strip the module path and any generics off a type name, so log lines say
/// `AtomicCounter` rather than `contend::counter::atomic_counter::AtomicCounter`.
fn short_type_name<C>() -> &'static str {
    let name = std::any::type_name::<C>();
    let name = match name.find('<') {
        Some(generics) => &name[..generics],
        None => name,
    };
    match name.rfind("::") {
        Some(path) => &name[path + 2..],
        None => name,
    }
}
