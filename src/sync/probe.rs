use super::{CriticalSection, Guard};
use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc, Barrier,
};

/// Records what happens inside a critical section
#[derive(Default)]
pub(crate) struct Probe {
    inside: AtomicUsize,
    overlaps: AtomicUsize,
    count: AtomicU64,
}

impl Probe {
    // Same split load/store as the accumulator, so an overlap shows up as a lost increment too
    fn visit(&self) {
        if self.inside.fetch_add(1, Ordering::SeqCst) != 0 {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        let c = self.count.load(Ordering::Relaxed);
        self.count.store(c + 1, Ordering::Relaxed);
        self.inside.fetch_sub(1, Ordering::SeqCst);
    }
    pub(crate) fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }
    pub(crate) fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

/// `workers` threads each pass through `guard` `rounds` times
pub(crate) fn hammer(guard: Arc<dyn Guard>, workers: usize, rounds: u64) -> Arc<Probe> {
    let probe = Arc::new(Probe::default());
    let start = Arc::new(Barrier::new(workers));
    let ths = (0..workers)
        .map(|id| {
            let guard = guard.clone();
            let probe = probe.clone();
            let start = start.clone();
            std::thread::spawn(move || {
                start.wait();
                for _ in 0..rounds {
                    let _cs = CriticalSection::enter(&*guard, id);
                    probe.visit();
                }
            })
        })
        .collect::<Vec<_>>();
    ths.into_iter().for_each(|th| th.join().unwrap());
    probe
}
