use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal per-source errors; malformed lines never surface as errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Path of the source that failed
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } => path,
            Self::Decompress { path, .. } => path,
        }
    }
}
