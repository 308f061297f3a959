use super::Guard;
use std::sync::atomic::{AtomicBool, Ordering};

/// Spin-lock on one lock word, taken with an atomic swap.
///
/// While the word is held the waiters only read it, and retry the swap once it reads free.
#[derive(Default)]
pub struct TestAndSet {
    locked: AtomicBool,
}

impl TestAndSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl Guard for TestAndSet {
    fn enter(&self, _id: usize) {
        while self.locked.swap(true, Ordering::Acquire) {
            while self.locked.load(Ordering::Relaxed) {
                std::hint::spin_loop()
            }
        }
    }
    fn leave(&self, _id: usize) {
        self.locked.store(false, Ordering::Release)
    }
}
