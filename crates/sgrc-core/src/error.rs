//! Error types for sgrc

use thiserror::Error;

/// Main error type for sgrc operations
#[derive(Error, Debug)]
pub enum SgrError {
    /// A color value that is neither `[R, G, B]` nor a reset sentinel
    #[error("provided RGB value needs to be an array, i.e [R, G, B], not {0}")]
    InvalidColorFormat(String),

    /// A color component was requested before any RGB color was set
    #[error("no RGB color has been set")]
    NoColorSet,

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for sgrc operations
pub type Result<T> = std::result::Result<T, SgrError>;
