use super::{other, Guard};
use std::sync::atomic::{AtomicBool, Ordering};

/// Each worker raises a flag and waits for the other's to come down.
///
/// Excludes the other worker, but when both raise their flag before looking at the other's, both wait forever.
#[derive(Default)]
pub struct Flags {
    wants: [AtomicBool; 2],
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }
    pub(crate) fn raise(&self, id: usize) {
        self.wants[id].store(true, Ordering::SeqCst);
    }
    pub(crate) fn wait_for_other(&self, id: usize) {
        while self.wants[other(id)].load(Ordering::SeqCst) {
            std::hint::spin_loop()
        }
    }
}

impl Guard for Flags {
    fn enter(&self, id: usize) {
        self.raise(id);
        self.wait_for_other(id);
    }
    fn leave(&self, id: usize) {
        self.wants[id].store(false, Ordering::SeqCst)
    }
}
