use std::{fmt, io};

/// Worker management failures. Both abort the whole run.
#[derive(Debug)]
pub enum LabError {
    ThreadSpawn { worker: usize, source: io::Error },
    ThreadJoin { worker: usize },
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::ThreadSpawn { worker, source } => {
                write!(f, "failed to spawn worker {worker}: {source}")
            }
            LabError::ThreadJoin { worker } => write!(f, "failed to join worker {worker}"),
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabError::ThreadSpawn { source, .. } => Some(source),
            LabError::ThreadJoin { .. } => None,
        }
    }
}
