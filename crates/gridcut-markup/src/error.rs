//! Error types for markup generation

use thiserror::Error;

/// Errors that can occur while generating HTML from a slice tree
#[derive(Error, Debug)]
pub enum MarkupError {
    /// Error from core raster operations (cropping)
    #[error("core error: {0}")]
    Core(#[from] gridcut_core::Error),

    /// Error encoding a slice image
    #[error("image error: {0}")]
    Image(#[from] gridcut_io::IoError),

    /// Filesystem error writing slice files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slice tree was built from a raster with different dimensions
    #[error(
        "slice tree is {tree_width}x{tree_height} but the raster is {raster_width}x{raster_height}"
    )]
    TreeMismatch {
        tree_width: u32,
        tree_height: u32,
        raster_width: u32,
        raster_height: u32,
    },

    /// File mode was requested without a slice directory
    #[error("embedding is disabled but no slice directory was provided")]
    MissingSliceDir,
}

/// Result type for markup generation
pub type MarkupResult<T> = std::result::Result<T, MarkupError>;
