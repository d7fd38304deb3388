use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Failures of the edge-list loader. Malformed lines are never errors;
/// they are skipped during the scan.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open edge list {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while scanning edge list: {0}")]
    Io(#[from] io::Error),
    #[error("edge list changed between construction passes")]
    InputChanged,
    #[error("graph needs ~{required_mb}MB, exceeds max_memory_mb={limit_mb}MB")]
    MemoryLimit { required_mb: usize, limit_mb: usize },
}
