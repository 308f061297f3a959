use super::{other, Guard};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Strict alternation between two workers, worker 0 goes first.
///
/// Mutually exclusive, but a worker that wants in twice in a row has to wait for the other one.
/// Pinned to a single core this costs a whole scheduling quantum per round.
#[derive(Default)]
pub struct Turns {
    turn: AtomicUsize,
}

impl Turns {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for Turns {
    fn enter(&self, id: usize) {
        while self.turn.load(Ordering::Acquire) != id {
            std::hint::spin_loop()
        }
    }
    fn leave(&self, id: usize) {
        self.turn.store(other(id), Ordering::Release)
    }
}

#[cfg(test)]
mod tests {
    use crate::sync::{probe::hammer, turns::Turns, CriticalSection};
    use std::sync::{Arc, Mutex};

    #[test]
    fn mutual_exclusion() {
        const WORK: u64 = 300;
        let probe = hammer(Arc::new(Turns::new()), 2, WORK);
        assert_eq!(probe.overlaps(), 0);
        assert_eq!(probe.count(), WORK * 2);
    }

    #[test]
    fn strictly_alternates() {
        const WORK: usize = 300;
        let mu = Arc::new(Turns::new());
        let log = Arc::new(Mutex::new(Vec::with_capacity(WORK * 2)));
        // Worker 1 is started first but must still wait for worker 0
        let ths = [1, 0]
            .into_iter()
            .map(|id| {
                let mu = mu.clone();
                let log = log.clone();
                std::thread::spawn(move || {
                    for _ in 0..WORK {
                        let _cs = CriticalSection::enter(&*mu, id);
                        log.lock().unwrap().push(id);
                    }
                })
            })
            .collect::<Vec<_>>();
        ths.into_iter().for_each(|th| th.join().unwrap());

        let log = log.lock().unwrap();
        assert_eq!(log.len(), WORK * 2);
        assert!(log.iter().enumerate().all(|(i, &id)| id == i % 2));
    }

    #[test]
    fn waits_for_turn() {
        let mu = Arc::new(Turns::new());
        let th = std::thread::spawn({
            let mu = mu.clone();
            move || {
                let _cs = CriticalSection::enter(&*mu, 1);
            }
        });
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(!th.is_finished());

        drop(CriticalSection::enter(&*mu, 0));
        th.join().unwrap();
    }
}
