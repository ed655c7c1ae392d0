use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrismError>;

#[derive(Error, Debug)]
pub enum PrismError {
    // Filesystem errors carry the action and the path that failed
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve base path {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Console output sink errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PrismError {
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrismError::CreateDir { path: path.into(), source }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrismError::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrismError::Write { path: path.into(), source }
    }
}

impl From<config::ConfigError> for PrismError {
    fn from(err: config::ConfigError) -> Self {
        PrismError::Configuration(err.to_string())
    }
}
