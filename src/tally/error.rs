use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::common::io_error_msg;

/// Everything that can stop a tally run. None of these are retried.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("invalid number of workers: {requested} (must be a positive integer)")]
    InvalidConfig { requested: i64 },

    #[error("no input to analyze")]
    EmptyInput,

    #[error("{}: No such file or directory", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: {}", .path.display(), io_error_msg(.source))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl TallyError {
    /// Attach the offending path to an I/O error, splitting out NotFound.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            TallyError::FileNotFound { path }
        } else {
            TallyError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
