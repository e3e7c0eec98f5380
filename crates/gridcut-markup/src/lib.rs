//! Gridcut Markup - HTML reassembly of sliced images
//!
//! Turns a [`gridcut_segment::SliceTree`] into an HTML `<table>` whose
//! cells carry the image slices, so the browser reassembles the
//! original picture. One `<tr>` per band, one `<td>` per segment;
//! blank regions become a stretched 1x1 transparent filler instead of
//! real pixel data.
//!
//! ```
//! use gridcut_core::Raster;
//! use gridcut_markup::{render_html, HtmlOptions};
//! use gridcut_segment::segment;
//!
//! let raster = Raster::new(16, 16).unwrap();
//! let tree = segment(&raster).unwrap();
//! let html = render_html(&raster, &tree, &HtmlOptions::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod error;
pub mod html;

pub use error::{MarkupError, MarkupResult};
pub use html::{render_html, render_table, HtmlOptions};
