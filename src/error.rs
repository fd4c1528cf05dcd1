use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the fontface generator
#[derive(Error, Debug)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output stylesheet is already present and the run must not touch it
    #[error("File {} already exists. Delete it before updating!", .0.display())]
    OutputExists(PathBuf),

    /// Appending a rule to the output stylesheet failed
    #[error("Error while writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for fontface operations
pub type Result<T> = std::result::Result<T, Error>;
