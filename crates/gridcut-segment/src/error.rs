//! Error types for segmentation operations

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Error, Debug)]
pub enum SegmentError {
    /// Error from core raster operations
    #[error("core error: {0}")]
    Core(#[from] gridcut_core::Error),

    /// Column segmentation was asked to refine a blank band
    #[error("cannot segment columns of a blank band at y={y} (height {height})")]
    BlankBand { y: u32, height: u32 },

    /// Band rows lie outside the raster
    #[error("band at y={y} with height {height} exceeds raster height {image_height}")]
    BandOutOfRange {
        y: u32,
        height: u32,
        image_height: u32,
    },

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
}

/// Result type for segmentation operations
pub type SegmentResult<T> = std::result::Result<T, SegmentError>;
