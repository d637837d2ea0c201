//! Error types for spelling-filter
//!
//! Every failure is fatal for the run; callers propagate these with `?`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading letters, opening the word list, or writing results
#[derive(Debug, Error)]
pub enum FilterError {
    /// The user input cannot be used (empty letters, unknown encoding label)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The word-list file does not exist
    #[error("Word list not found: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while reading input or writing output
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilterError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
