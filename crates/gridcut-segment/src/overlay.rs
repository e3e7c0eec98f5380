//! Segmentation overlay rendering
//!
//! Paints a slice tree back onto a copy of its source raster: band
//! rectangles outlined in one color, segment rectangles in another,
//! blank regions tinted translucently. Useful for inspecting how an
//! image was cut without reading coordinates.

use gridcut_core::{Raster, Rgba};

use crate::error::{SegmentError, SegmentResult};
use crate::runs::RunKind;
use crate::tree::SliceTree;

/// Colors and opacity used by [`render_overlay`].
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Outline color for band rectangles.
    pub band_color: Rgba,
    /// Outline color for segment rectangles.
    pub segment_color: Rgba,
    /// Tint blended over blank bands and blank segments.
    pub blank_fill: Rgba,
    /// Tint opacity in `[0.0, 1.0]`.
    pub blank_opacity: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            band_color: Rgba::RED,
            segment_color: Rgba::BLUE,
            blank_fill: Rgba::opaque(160, 160, 160),
            blank_opacity: 0.35,
        }
    }
}

/// Render a segmentation overlay onto a copy of the raster.
///
/// The input raster is not modified.
///
/// # Errors
///
/// Returns [`SegmentError::TreeMismatch`] if the tree was built from
/// a raster with different dimensions.
pub fn render_overlay(
    raster: &Raster,
    tree: &SliceTree,
    options: &OverlayOptions,
) -> SegmentResult<Raster> {
    if tree.width() != raster.width() || tree.height() != raster.height() {
        return Err(SegmentError::TreeMismatch {
            tree_width: tree.width(),
            tree_height: tree.height(),
            raster_width: raster.width(),
            raster_height: raster.height(),
        });
    }

    let mut canvas = raster.to_mut();
    for band in tree.bands() {
        // Tint blank regions first so the outlines stay on top.
        if band.is_blank() {
            canvas.blend_rect(
                &band.rect(tree.width()),
                options.blank_fill,
                options.blank_opacity,
            );
        }
        for segment in band.segments() {
            if segment.kind == RunKind::Blank {
                canvas.blend_rect(&segment.rect(), options.blank_fill, options.blank_opacity);
            }
        }
        for segment in band.segments() {
            canvas.draw_rect_outline(&segment.rect(), options.segment_color, 1);
        }
        canvas.draw_rect_outline(&band.rect(tree.width()), options.band_color, 1);
    }
    Ok(canvas.into())
}
