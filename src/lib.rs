//! Mutual exclusion strategies, and a lab that shows which of them actually exclude.
//!
//! Every experiment sums `0..=bound` with several workers adding into one shared counter, each addition inside
//! a critical section guarded by the strategy under test. Any lost update shows up in the sum.

pub mod config;
pub mod lab;
pub mod sync;
