//! Error types for image I/O

use thiserror::Error;

/// Errors that can occur during image reading and writing
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not in a recognized or compiled-in image format
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The file contains invalid or corrupted data
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// Error while decoding an image
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Error while encoding an image
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Error from core raster operations
    #[error("core error: {0}")]
    Core(#[from] gridcut_core::Error),
}

/// Result type for image I/O operations
pub type IoResult<T> = std::result::Result<T, IoError>;
