use super::{
    accumulator::SharedAccumulator,
    error::LabError,
    threads::{JoinFailed, Threads},
    work::{closed_form, WorkRange},
};
use crate::sync::{CriticalSection, Guard};
use std::{
    sync::{Arc, Barrier},
    time::{Duration, Instant},
};

/// Builds a fresh guard for the given number of workers
pub type GuardFactory = Box<dyn Fn(usize) -> Arc<dyn Guard> + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
    /// A worker could not be spawned or joined
    Aborted,
}

/// Outcome of one experiment run. A wrong sum is a result, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub label: String,
    pub workers: usize,
    pub sum: u64,
    pub expected: u64,
    pub elapsed: Duration,
}

impl Report {
    pub fn is_exact(&self) -> bool {
        self.sum == self.expected
    }
}

/// One guard strategy put to work.
pub struct Experiment {
    label: String,
    max_workers: usize,
    factory: GuardFactory,
    accumulator: Arc<SharedAccumulator>,
    phase: Phase,
}

/// Workers a strategy is run with, `max_workers == 0` means it takes any number
pub fn effective_workers(configured: usize, max_workers: usize) -> usize {
    if max_workers > 0 && max_workers < configured {
        max_workers
    } else {
        configured
    }
}

impl Experiment {
    pub fn new<F>(label: impl Into<String>, max_workers: usize, factory: F) -> Self
    where
        F: Fn(usize) -> Arc<dyn Guard> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            max_workers,
            factory: Box::new(factory),
            accumulator: Arc::new(SharedAccumulator::new()),
            phase: Phase::Idle,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sums `0..=bound` with up to `workers` workers passing through a freshly built guard.
    ///
    /// Returns once every worker did. A guard that never lets a worker in never returns.
    ///
    /// On a spawn or join failure the experiment is left [`Phase::Aborted`]. Workers spawned before a failed
    /// spawn stay parked at the start line for good.
    ///
    /// # Panics
    ///
    /// If the sum up to `bound` overflows a `u64`, see [`closed_form`].
    pub fn run<T: Threads>(&mut self, threads: &T, workers: usize, bound: u64) -> Result<Report, LabError> {
        let Some(expected) = closed_form(bound) else {
            panic!("sum up to {bound} overflows 64 bits");
        };
        let workers = effective_workers(workers, self.max_workers);
        self.accumulator.reset();
        let guard = (self.factory)(workers);
        self.phase = Phase::Running;

        let began = Instant::now();
        let result = self.spawn_and_join(threads, workers, bound, guard);
        self.phase = match result {
            Ok(()) => Phase::Completed,
            Err(_) => Phase::Aborted,
        };
        result?;

        Ok(Report {
            label: self.label.clone(),
            workers,
            sum: self.accumulator.get(),
            expected,
            elapsed: began.elapsed(),
        })
    }

    fn spawn_and_join<T: Threads>(
        &self,
        threads: &T,
        workers: usize,
        bound: u64,
        guard: Arc<dyn Guard>,
    ) -> Result<(), LabError> {
        let start = Arc::new(Barrier::new(workers));
        let mut handles = Vec::with_capacity(workers);
        for range in WorkRange::partition(workers, bound) {
            let guard = guard.clone();
            let accumulator = self.accumulator.clone();
            let start = start.clone();
            let body = Box::new(move || {
                start.wait();
                work(range, &*guard, &accumulator)
            });
            let handle = threads
                .spawn(format!("{}-{}", self.label, range.id), body)
                .map_err(|source| LabError::ThreadSpawn {
                    worker: range.id,
                    source,
                })?;
            handles.push(handle);
        }
        for (worker, handle) in handles.into_iter().enumerate() {
            threads
                .join(handle)
                .map_err(|JoinFailed| LabError::ThreadJoin { worker })?;
        }
        Ok(())
    }
}

/// A worker's whole life: add up its range, one value per critical section
pub fn work(range: WorkRange, guard: &dyn Guard, accumulator: &SharedAccumulator) {
    for i in range.iter() {
        let _cs = CriticalSection::enter(guard, range.id);
        accumulator.add(i);
    }
}
