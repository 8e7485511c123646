//! File processing errors.

use std::path::PathBuf;

/// Errors raised while reading or writing a file in the pipeline. Within
/// a batch run these are collected per file, not propagated.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
