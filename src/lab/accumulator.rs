use std::sync::atomic::{AtomicU64, Ordering};

/// The counter every worker adds into.
///
/// An addition is a separate read and write, so two workers adding at once can lose one of the updates, exactly
/// like `res += i` on a plain variable. Both halves are relaxed atomics, the guard alone orders them.
#[derive(Default)]
pub struct SharedAccumulator {
    value: AtomicU64,
}

impl SharedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&self, n: u64) {
        let v = self.value.load(Ordering::Relaxed);
        self.value.store(v.wrapping_add(n), Ordering::Relaxed);
    }
    pub fn reset(&self) {
        self.value.store(0, Ordering::SeqCst);
    }
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
