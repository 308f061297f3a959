use crate::lab::{catalogue::Strategy, work::closed_form};
use crate::sync::Visibility;
use anyhow::{ensure, Result};

/// What one run of the lab does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Workers per experiment, capped by what each strategy supports
    pub workers: usize,
    /// Every experiment sums `0..=bound`
    pub bound: u64,
    /// Ordering of the Peterson and Dekker handshakes
    pub visibility: Visibility,
    /// Strategies to run, in order
    pub strategies: Vec<Strategy>,
}

impl Config {
    pub const WORKERS: usize = 2;
    pub const BOUND: u64 = 1_000_000;

    pub fn validate(&self) -> Result<()> {
        ensure!(self.workers > 0, "need at least one worker");
        ensure!(
            closed_form(self.bound).is_some(),
            "sum up to {} overflows 64 bits",
            self.bound
        );
        Ok(())
    }
}

impl Default for Config {
    /// The strategies compiled in through cargo features
    fn default() -> Self {
        let compiled_in = [
            (cfg!(feature = "unguarded"), Strategy::Unguarded),
            (cfg!(feature = "turns"), Strategy::Turns),
            (cfg!(feature = "flags"), Strategy::Flags),
            (cfg!(feature = "peterson"), Strategy::Peterson),
            (cfg!(feature = "dekker"), Strategy::Dekker),
            (cfg!(feature = "bakery"), Strategy::Bakery),
            (cfg!(feature = "test-and-set"), Strategy::TestAndSet),
            (cfg!(feature = "semaphore"), Strategy::Semaphore),
        ];
        Self {
            workers: Config::WORKERS,
            bound: Config::BOUND,
            visibility: Visibility::default(),
            strategies: compiled_in
                .into_iter()
                .filter_map(|(on, s)| on.then_some(s))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::lab::catalogue::Strategy;
    use crate::sync::Visibility;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.workers, 2);
        assert_eq!(config.bound, 1_000_000);
        assert_eq!(config.visibility, Visibility::Plain);
        assert!(config.validate().is_ok());
        // Catalogue order survives feature selection
        let mut sorted = config.strategies.clone();
        sorted.sort();
        assert_eq!(sorted, config.strategies);
        #[cfg(not(feature = "flags"))]
        assert!(!config.strategies.contains(&Strategy::Flags));
    }

    #[test]
    fn rejects_no_workers() {
        let config = Config {
            workers: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_overflowing_bound() {
        let config = Config {
            bound: u64::MAX / 2,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
