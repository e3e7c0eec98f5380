//! Raster segmentation for gridcut
//!
//! Splits an RGBA raster into a two-level slice tree: horizontal
//! [`Band`]s of blank and content rows, then column [`Segment`]s
//! within each content band. A row or column counts as blank only
//! when every pixel is exactly opaque white.
//!
//! The two passes share one run-merge fold ([`collect_runs`]), so
//! band and segment boundaries are found by identical logic.
//!
//! # Examples
//!
//! ```
//! use gridcut_core::{Raster, Rect, Rgba};
//! use gridcut_segment::segment;
//!
//! // A white canvas with one black square.
//! let mut canvas = Raster::new(30, 30).unwrap().to_mut();
//! canvas.fill_rect(&Rect::new_unchecked(10, 10, 10, 10), Rgba::BLACK);
//! let raster: Raster = canvas.into();
//!
//! let tree = segment(&raster).unwrap();
//! // Blank top, content middle, blank bottom.
//! assert_eq!(tree.bands().len(), 3);
//! assert_eq!(tree.content_segment_count(), 1);
//! ```
//!
//! With the `serde` feature enabled, the tree types serialize with
//! bands tagged by their variant name.

pub mod error;
pub mod overlay;
pub mod runs;
pub mod segmenter;
pub mod tree;

pub use gridcut_core;

pub use error::{SegmentError, SegmentResult};
pub use overlay::{OverlayOptions, render_overlay};
pub use runs::{Run, RunKind, classify_run, collect_runs, is_blank_run};
pub use segmenter::{segment, segment_columns, segment_rows};
pub use tree::{Band, Segment, SliceTree};
