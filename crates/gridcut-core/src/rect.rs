//! Rectangular regions
//!
//! [`Rect`] describes an axis-aligned region in image coordinates:
//! `(x, y)` is the top-left corner, `(w, h)` the extent in pixels.

use crate::error::{Error, Result};

/// A rectangular region in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either extent is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcut_core::Rect;
    ///
    /// let rect = Rect::new(10, 20, 30, 40).unwrap();
    /// assert_eq!(rect.right(), 40);
    /// assert_eq!(rect.bottom(), 60);
    /// ```
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "rectangle has zero extent: {w}x{h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validating the extents.
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The x coordinate one past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// The y coordinate one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// The area in pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains_point(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns `None` if the rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Clip the rectangle to an image of the given dimensions.
    ///
    /// Returns `None` if no part of the rectangle lies inside the image.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        if width == 0 || height == 0 {
            return None;
        }
        self.intersect(&Rect::new_unchecked(0, 0, width, height))
    }
}
