use mutex_lab::{config::Config, lab::Catalogue, lab::OsThreads};

// To take parallelism out of the picture, pin the process to one core: `taskset 1 mutex_lab`
fn main() -> anyhow::Result<()> {
    let config = Config::default();
    let mut catalogue = Catalogue::from_config(&config)?;
    #[cfg(feature = "custom")]
    catalogue.register("custom", 2, |_| {
        std::sync::Arc::new(mutex_lab::sync::custom::Custom::empty())
    });

    let stdout = std::io::stdout();
    catalogue.run(&OsThreads, &mut stdout.lock())?;
    Ok(())
}
