//! Runs guard strategies against a shared sum and checks what comes out.

pub mod accumulator;
pub mod catalogue;
pub mod error;
pub mod experiment;
pub mod threads;
pub mod work;

pub use catalogue::{Catalogue, Strategy};
pub use error::LabError;
pub use experiment::{Experiment, Report};
pub use threads::{JoinFailed, OsThreads, Threads};
