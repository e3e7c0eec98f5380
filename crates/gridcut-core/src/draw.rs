//! Rectangle drawing on mutable rasters
//!
//! Filling, blending, and outlining rectangular regions. All drawing
//! clips to the image bounds instead of failing, so callers can pass
//! rectangles that extend past the edges.

use crate::color::Rgba;
use crate::raster::{BYTES_PER_PIXEL, RasterMut};
use crate::rect::Rect;

impl RasterMut {
    /// Fill a rectangle with a solid color.
    ///
    /// A rectangle fully outside the image is a no-op.
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgba) {
        let Some(clipped) = rect.clip(self.width(), self.height()) else {
            return;
        };
        let quad = color.to_array();
        for y in clipped.y..clipped.bottom() {
            let row = self.row_mut(y);
            for x in clipped.x..clipped.right() {
                let i = x as usize * BYTES_PER_PIXEL;
                row[i..i + BYTES_PER_PIXEL].copy_from_slice(&quad);
            }
        }
    }

    /// Blend a translucent color over a rectangle.
    ///
    /// `opacity` is clamped to `[0.0, 1.0]`; 0.0 leaves the pixels
    /// untouched and 1.0 is equivalent to [`RasterMut::fill_rect`].
    pub fn blend_rect(&mut self, rect: &Rect, color: Rgba, opacity: f32) {
        let Some(clipped) = rect.clip(self.width(), self.height()) else {
            return;
        };
        let alpha = opacity.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }
        let quad = color.to_array();
        for y in clipped.y..clipped.bottom() {
            let row = self.row_mut(y);
            for x in clipped.x..clipped.right() {
                let i = x as usize * BYTES_PER_PIXEL;
                for c in 0..BYTES_PER_PIXEL {
                    let dst = row[i + c] as f32;
                    let src = quad[c] as f32;
                    row[i + c] = (dst + (src - dst) * alpha).round() as u8;
                }
            }
        }
    }

    /// Draw a rectangle outline with the given edge thickness.
    ///
    /// A thickness of 0 is treated as 1. Rectangles too small to hold
    /// the outline are filled solid.
    pub fn draw_rect_outline(&mut self, rect: &Rect, color: Rgba, thickness: u32) {
        let t = thickness.max(1);
        if rect.w <= 2 * t || rect.h <= 2 * t {
            self.fill_rect(rect, color);
            return;
        }

        // Top and bottom edges span the full width; left and right
        // edges fill the remaining rows between them.
        self.fill_rect(&Rect::new_unchecked(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(
            &Rect::new_unchecked(rect.x, rect.bottom() - t, rect.w, t),
            color,
        );
        self.fill_rect(
            &Rect::new_unchecked(rect.x, rect.y + t, t, rect.h - 2 * t),
            color,
        );
        self.fill_rect(
            &Rect::new_unchecked(rect.right() - t, rect.y + t, t, rect.h - 2 * t),
            color,
        );
    }
}
