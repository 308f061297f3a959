use super::{
    experiment::{effective_workers, Experiment, Report},
    threads::Threads,
};
use crate::config::Config;
use crate::sync::{
    dekker::Dekker, flags::Flags, lamports_bakery::Bakery, peterson::Peterson, semaphore::Semaphore,
    test_and_set::TestAndSet, turns::Turns, unguarded::Unguarded, Guard, Visibility,
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// The built-in strategies, in the order the lab runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    Unguarded,
    Turns,
    Flags,
    Peterson,
    Dekker,
    Bakery,
    TestAndSet,
    Semaphore,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Unguarded => "unguarded",
            Strategy::Turns => "take turns",
            Strategy::Flags => "raise flags",
            Strategy::Peterson => "Peterson's Algorithm",
            Strategy::Dekker => "Dekker's Algorithm",
            Strategy::Bakery => "Bakery Algorithm (Lamport)",
            Strategy::TestAndSet => "test&set",
            Strategy::Semaphore => "semaphore",
        }
    }

    /// 0 when any number of workers is fine
    pub fn max_workers(self) -> usize {
        match self {
            Strategy::Turns | Strategy::Flags | Strategy::Peterson | Strategy::Dekker => 2,
            Strategy::Unguarded | Strategy::Bakery | Strategy::TestAndSet | Strategy::Semaphore => 0,
        }
    }

    pub fn build(self, workers: usize, visibility: Visibility) -> Arc<dyn Guard> {
        match self {
            Strategy::Unguarded => Arc::new(Unguarded::new()),
            Strategy::Turns => Arc::new(Turns::new()),
            Strategy::Flags => Arc::new(Flags::new()),
            Strategy::Peterson => Arc::new(Peterson::new(visibility)),
            Strategy::Dekker => Arc::new(Dekker::new(visibility)),
            Strategy::Bakery => Arc::new(Bakery::new(workers)),
            Strategy::TestAndSet => Arc::new(TestAndSet::new()),
            Strategy::Semaphore => Arc::new(Semaphore::new()),
        }
    }
}

/// Experiments run back to back, each on its own guard and accumulator.
pub struct Catalogue {
    workers: usize,
    bound: u64,
    experiments: Vec<Experiment>,
}

impl Catalogue {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().context("invalid lab configuration")?;
        let visibility = config.visibility;
        let mut catalogue = Self {
            workers: config.workers,
            bound: config.bound,
            experiments: Vec::with_capacity(config.strategies.len()),
        };
        for &strategy in &config.strategies {
            catalogue.register(strategy.label(), strategy.max_workers(), move |n| {
                strategy.build(n, visibility)
            });
        }
        Ok(catalogue)
    }

    /// Appends a strategy of your own, run after everything registered before it
    pub fn register<F>(&mut self, label: impl Into<String>, max_workers: usize, factory: F) -> &mut Self
    where
        F: Fn(usize) -> Arc<dyn Guard> + Send + Sync + 'static,
    {
        self.experiments.push(Experiment::new(label, max_workers, factory));
        self
    }

    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Runs every experiment in order and writes what each one summed up to `out`.
    ///
    /// Stops at the first worker that could not be spawned or joined.
    pub fn run<T: Threads, W: Write>(&mut self, threads: &T, out: &mut W) -> Result<Vec<Report>> {
        let mut reports = Vec::with_capacity(self.experiments.len());
        for ex in &mut self.experiments {
            let workers = effective_workers(self.workers, ex.max_workers());
            writeln!(out, "starting experiment \"{}\" with {} threads", ex.label(), workers)?;
            out.flush()?;

            let report = ex
                .run(threads, self.workers, self.bound)
                .with_context(|| format!("experiment \"{}\" aborted", ex.label()))?;
            writeln!(out, "sum is:        {:>20}", report.sum)?;
            writeln!(out, "sum should be: {:>20}", report.expected)?;
            reports.push(report);
        }
        Ok(reports)
    }
}
