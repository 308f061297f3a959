pub mod custom;
pub mod dekker;
pub mod flags;
pub mod lamports_bakery;
pub mod peterson;
pub mod semaphore;
pub mod test_and_set;
pub mod turns;
pub mod unguarded;

#[cfg(test)]
pub(crate) mod probe;

use std::sync::atomic::Ordering;

/// A mutual exclusion strategy guarding one critical section.
///
/// The contract every strategy is written against
/// 1. `enter(id)` and `leave(id)` are only ever called by the worker owning `id`, and always in pairs.
/// 2. `enter` may spin or block until the strategy lets the worker in.
/// 3. `leave` never blocks, and makes the critical section available to whoever waits.
///
/// Whether at most one worker is inside at a time is exactly what differs between strategies.
pub trait Guard: Send + Sync {
    fn enter(&self, id: usize);
    fn leave(&self, id: usize);
}

/// Held while inside the critical section, leaves the guard on drop.
pub struct CriticalSection<'a, G: Guard + ?Sized> {
    guard: &'a G,
    id: usize,
}

impl<'a, G: Guard + ?Sized> CriticalSection<'a, G> {
    pub fn enter(guard: &'a G, id: usize) -> Self {
        guard.enter(id);
        Self { guard, id }
    }
}

impl<G: Guard + ?Sized> Drop for CriticalSection<'_, G> {
    fn drop(&mut self) {
        self.guard.leave(self.id)
    }
}

/// Memory ordering of the Peterson and Dekker handshakes.
///
/// `Plain` issues relaxed loads and stores, no fence between the flag write and the spin read. That is what
/// volatile variables give you, and on hardware with store buffers both algorithms can let two workers in.
/// `SeqCst` makes them correct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Plain,
    SeqCst,
}

impl Visibility {
    fn load(self) -> Ordering {
        match self {
            Visibility::Plain => Ordering::Relaxed,
            Visibility::SeqCst => Ordering::SeqCst,
        }
    }
    fn store(self) -> Ordering {
        self.load()
    }
}

// Two-worker strategies address the peer as `id ^ 1`
fn other(id: usize) -> usize {
    debug_assert!(id < 2, "two-worker strategy entered by worker {id}");
    id ^ 1
}
