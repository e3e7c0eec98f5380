//! Gridcut - Raster segmentation into bands and slices
//!
//! Gridcut splits an RGBA image into horizontal bands of blank and
//! content rows, then splits each content band into column segments,
//! producing a two-level [`SliceTree`]. The tree drives cropping,
//! preview rendering, and HTML table reassembly of the image.
//!
//! # Overview
//!
//! - Segmentation: [`segment`], [`segment_rows`], [`segment_columns`]
//! - Containers: [`Raster`] / [`RasterMut`], [`Rect`], [`Rgba`]
//! - Image I/O (PNG, JPEG): the [`io`] module
//! - HTML reassembly: the [`markup`] module
//! - Boundary previews: [`render_overlay`]
//!
//! # Example
//!
//! ```
//! use gridcut::{segment, Raster, Rect, Rgba};
//!
//! // A white canvas with one black square in the middle.
//! let mut canvas = Raster::new(30, 30).unwrap().to_mut();
//! canvas.fill_rect(&Rect::new_unchecked(10, 10, 10, 10), Rgba::BLACK);
//! let raster: Raster = canvas.into();
//!
//! let tree = segment(&raster).unwrap();
//! assert_eq!(tree.bands().len(), 3);
//! assert_eq!(tree.content_segment_count(), 1);
//! ```
//!
//! Enable the `serde` feature to serialize trees with `serde`.

// Re-export core types (containers used everywhere)
pub use gridcut_core::*;

// Segmentation is the point of the library, so its names live at the top level
pub use gridcut_segment::{
    Band, OverlayOptions, Run, RunKind, Segment, SegmentError, SegmentResult, SliceTree,
    classify_run, collect_runs, is_blank_run, render_overlay, segment, segment_columns,
    segment_rows,
};

// Re-export supporting crates as modules to avoid name conflicts
pub use gridcut_io as io;
pub use gridcut_markup as markup;
