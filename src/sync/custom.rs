use super::Guard;

/// A guard assembled from an entry and an exit protocol.
///
/// This is the slot for trying out a strategy of your own without touching the harness. [`Custom::empty`] is
/// the blank slot, it lets everybody in until it is filled in.
pub struct Custom<E, L> {
    enter: E,
    leave: L,
}

impl<E, L> Custom<E, L>
where
    E: Fn(usize) + Send + Sync,
    L: Fn(usize) + Send + Sync,
{
    pub fn new(enter: E, leave: L) -> Self {
        Self { enter, leave }
    }
}

impl Custom<fn(usize), fn(usize)> {
    pub fn empty() -> Self {
        Self {
            enter: |_| {},
            leave: |_| {},
        }
    }
}

impl<E, L> Guard for Custom<E, L>
where
    E: Fn(usize) + Send + Sync,
    L: Fn(usize) + Send + Sync,
{
    fn enter(&self, id: usize) {
        (self.enter)(id)
    }
    fn leave(&self, id: usize) {
        (self.leave)(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::sync::{custom::Custom, probe::hammer, test_and_set::TestAndSet, Guard};
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    };

    #[test]
    fn forwards_ids() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mu = Custom::new(
            {
                let calls = calls.clone();
                move |id| calls.lock().unwrap().push(("enter", id))
            },
            {
                let calls = calls.clone();
                move |id| calls.lock().unwrap().push(("leave", id))
            },
        );
        mu.enter(1);
        mu.leave(1);
        assert_eq!(*calls.lock().unwrap(), vec![("enter", 1), ("leave", 1)]);
    }

    #[test]
    fn compare_and_swap_lock() {
        let locked = Arc::new(AtomicBool::new(false));
        let mu = Custom::new(
            {
                let locked = locked.clone();
                move |_| {
                    while locked
                        .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                        .is_err()
                    {
                        std::hint::spin_loop()
                    }
                }
            },
            {
                let locked = locked.clone();
                move |_| locked.store(false, Ordering::Release)
            },
        );
        let probe = hammer(Arc::new(mu), 4, 50_000);
        assert_eq!(probe.overlaps(), 0);
        assert_eq!(probe.count(), 200_000);
    }

    #[test]
    fn wraps_existing_guard() {
        let inner = Arc::new(TestAndSet::new());
        let mu = Custom::new(
            {
                let inner = inner.clone();
                move |id| inner.enter(id)
            },
            {
                let inner = inner.clone();
                move |id| inner.leave(id)
            },
        );
        mu.enter(0);
        assert!(inner.is_locked());
        mu.leave(0);
        assert!(!inner.is_locked());
    }

    #[test]
    fn empty_slot_lets_everybody_in() {
        let mu = Custom::empty();
        mu.enter(0);
        mu.enter(1);
        mu.leave(1);
        mu.leave(0);
    }
}
