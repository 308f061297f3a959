use super::{other, Guard, Visibility};
use std::sync::atomic::{AtomicBool, AtomicUsize};

/// Dekker's algorithm for two workers.
///
/// Flags as in [`super::flags::Flags`], plus a turn word that decides who backs off when both want in.
/// The loser lowers its flag until the turn comes back to it. Shares Peterson's reliance on [`Visibility`].
pub struct Dekker {
    wants: [AtomicBool; 2],
    turn: AtomicUsize,
    visibility: Visibility,
}

impl Dekker {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            wants: Default::default(),
            turn: AtomicUsize::new(0),
            visibility,
        }
    }
}

impl Guard for Dekker {
    fn enter(&self, id: usize) {
        let (load, store) = (self.visibility.load(), self.visibility.store());
        let other = other(id);
        self.wants[id].store(true, store);
        while self.wants[other].load(load) {
            if self.turn.load(load) == other {
                self.wants[id].store(false, store);
                while self.turn.load(load) == other {
                    std::hint::spin_loop()
                }
                self.wants[id].store(true, store);
            }
        }
    }
    fn leave(&self, id: usize) {
        let store = self.visibility.store();
        self.turn.store(other(id), store);
        self.wants[id].store(false, store);
    }
}
