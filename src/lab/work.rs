/// The share of `0..=bound` one worker adds up: `id`, `id + stride`, `id + 2 * stride`, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkRange {
    pub id: usize,
    pub stride: usize,
    pub bound: u64,
}

impl WorkRange {
    /// Splits `0..=bound` between `workers` workers
    pub fn partition(workers: usize, bound: u64) -> impl Iterator<Item = WorkRange> {
        (0..workers).map(move |id| WorkRange {
            id,
            stride: workers,
            bound,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> {
        (self.id as u64..=self.bound).step_by(self.stride)
    }
}

/// `0 + 1 + ... + bound`, what the workers should add up to. `None` if `bound * (bound + 1)` overflows a `u64`.
pub fn closed_form(bound: u64) -> Option<u64> {
    bound
        .checked_add(1)
        .and_then(|b| b.checked_mul(bound))
        .map(|b| b / 2)
}
