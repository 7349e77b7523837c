use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The character document could not be loaded. Rendering stops here.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("failed to read character document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse character document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureCode {
    Io,
    Parse,
}

impl LoadFailure {
    pub fn code(&self) -> LoadFailureCode {
        match self {
            Self::Io { .. } => LoadFailureCode::Io,
            Self::Parse(_) => LoadFailureCode::Parse,
        }
    }
}
