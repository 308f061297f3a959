use std::{io, thread};

/// The worker did not return normally, it panicked or could not be waited for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoinFailed;

/// Whatever runs the workers.
///
/// Spawning hands out a handle, joining consumes it and reports whether the worker ran to completion.
pub trait Threads {
    type Handle;
    fn spawn(&self, name: String, body: Box<dyn FnOnce() + Send + 'static>) -> io::Result<Self::Handle>;
    fn join(&self, handle: Self::Handle) -> Result<(), JoinFailed>;
}

/// OS threads
#[derive(Clone, Copy, Default)]
pub struct OsThreads;

impl Threads for OsThreads {
    type Handle = thread::JoinHandle<()>;

    fn spawn(&self, name: String, body: Box<dyn FnOnce() + Send + 'static>) -> io::Result<Self::Handle> {
        thread::Builder::new().name(name).spawn(body)
    }

    fn join(&self, handle: Self::Handle) -> Result<(), JoinFailed> {
        handle.join().map_err(|_| JoinFailed)
    }
}
