//! Error types for gridcut core operations

use thiserror::Error;

/// Errors that can occur in core raster operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// Coordinates outside the image bounds
    #[error("coordinates ({x}, {y}) outside image bounds {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for core raster operations
pub type Result<T> = std::result::Result<T, Error>;
