/// Error kinds surfaced by the checker core
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl CheckerError {
    pub(crate) fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decoding(path: &Path, source: std::str::Utf8Error) -> Self {
        Self::Decoding {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileAccess { path, .. } | Self::Decoding { path, .. } => path,
        }
    }
}
