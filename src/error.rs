use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjcatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}
impl ProjcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjcatError::Io {
            path: path.into(),
            source,
        }
    }
}
