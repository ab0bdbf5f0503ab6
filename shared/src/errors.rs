use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{MAX_THREADS, MIN_THREADS};

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid thread count `{0}`, expected an integer in [{min}, {max}]", min = MIN_THREADS, max = MAX_THREADS)]
    InvalidThreadCount(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to spawn worker {ordinal}: {source}")]
    SpawnWorker {
        ordinal: usize,
        source: io::Error,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("failed to write results: {0}")]
    Output(#[from] io::Error),
}

impl SolverError {
    /// Errors raised before any search begins.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidThreadCount(_)
                | SolverError::InvalidConfig(_)
                | SolverError::ConfigRead { .. }
                | SolverError::ConfigParse { .. }
        )
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
