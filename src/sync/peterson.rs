use super::{other, Guard, Visibility};
use std::sync::atomic::{AtomicBool, AtomicUsize};

/// Peterson's algorithm for two workers.
///
/// A worker announces it wants in, then yields to the other one, and waits while the other one both wants in
/// and has not yielded back. Only correct if every worker sees the flag and yield writes in the same order,
/// see [`Visibility`].
pub struct Peterson {
    wants: [AtomicBool; 2],
    yields_to: AtomicUsize,
    visibility: Visibility,
}

impl Peterson {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            wants: Default::default(),
            yields_to: AtomicUsize::new(0),
            visibility,
        }
    }
}

impl Guard for Peterson {
    fn enter(&self, id: usize) {
        let (load, store) = (self.visibility.load(), self.visibility.store());
        let other = other(id);
        self.wants[id].store(true, store);
        self.yields_to.store(other, store);
        while self.wants[other].load(load) && self.yields_to.load(load) == other {
            std::hint::spin_loop()
        }
    }
    fn leave(&self, id: usize) {
        self.wants[id].store(false, self.visibility.store())
    }
}
