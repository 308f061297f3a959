use super::Guard;
use std::sync::{Condvar, Mutex, PoisonError};

/// Binary semaphore on the OS mutex and condition variable.
///
/// Waiters are descheduled instead of spinning. No fairness beyond what the OS gives.
#[derive(Default)]
pub struct Semaphore {
    held: Mutex<bool>,
    released: Condvar,
}

impl Semaphore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for Semaphore {
    fn enter(&self, _id: usize) {
        // A panic elsewhere cannot leave the bool half-written
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        while *held {
            held = self
                .released
                .wait(held)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *held = true;
    }
    fn leave(&self, _id: usize) {
        *self.held.lock().unwrap_or_else(PoisonError::into_inner) = false;
        self.released.notify_one();
    }
}
