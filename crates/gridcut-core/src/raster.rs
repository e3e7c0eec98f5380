//! RGBA raster image containers
//!
//! [`Raster`] is an immutable image backed by reference-counted pixel
//! data, so cloning is cheap and clones share the same buffer.
//! [`RasterMut`] holds the pixel data exclusively and allows in-place
//! edits; it converts back into a [`Raster`] with [`From`].
//!
//! Pixels are stored row-major as 4 bytes per pixel (R, G, B, A) with
//! no padding between rows.

use std::sync::Arc;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::rect::Rect;

/// Bytes per pixel: R, G, B, A.
pub const BYTES_PER_PIXEL: usize = 4;

/// Internal pixel storage shared between raster handles.
#[derive(Debug)]
struct RasterData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterData {
    /// Allocate storage filled with opaque white.
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = buffer_len(width, height).ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0xFF; len],
        })
    }

    #[inline]
    fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Buffer length in bytes for an image of the given dimensions.
///
/// The pixel count is computed in u64 where it cannot overflow; returns
/// `None` when the byte count overflows or does not fit in `usize`.
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    let bytes = (u64::from(width) * u64::from(height)).checked_mul(BYTES_PER_PIXEL as u64)?;
    usize::try_from(bytes).ok()
}

/// An immutable RGBA raster image.
///
/// # Examples
///
/// ```
/// use gridcut_core::Raster;
///
/// let raster = Raster::new(100, 80).unwrap();
/// assert_eq!(raster.width(), 100);
/// assert_eq!(raster.height(), 80);
/// // New rasters start as an opaque white canvas.
/// assert_eq!(raster.data()[0..4], [255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a raster filled with opaque white.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero
    /// or the pixel buffer would exceed `usize::MAX` bytes.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RasterData::new(width, height)?),
        })
    }

    /// Create a raster from existing RGBA bytes.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero,
    /// or [`Error::BufferSize`] if the buffer length does not match the
    /// dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        // A length past usize::MAX can never match a real buffer.
        let expected = buffer_len(width, height).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Stride in bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the RGBA bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.inner.width as usize + x as usize) * BYTES_PER_PIXEL;
        let d = &self.inner.data;
        Some(Rgba::new(d[i], d[i + 1], d[i + 2], d[i + 3]))
    }

    /// Get the number of handles sharing the pixel buffer.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create an independent copy of the pixel data.
    pub fn deep_clone(&self) -> Raster {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Copy a rectangular region into a new raster.
    ///
    /// The rectangle is clipped to the image bounds, so the result may
    /// be smaller than requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rectangle has zero
    /// extent or its origin lies outside the image.
    pub fn crop(&self, rect: &Rect) -> Result<Raster> {
        if rect.w == 0 || rect.h == 0 {
            return Err(Error::InvalidParameter(format!(
                "crop rectangle has zero extent: {}x{}",
                rect.w, rect.h
            )));
        }
        if rect.x >= self.width() || rect.y >= self.height() {
            return Err(Error::InvalidParameter(format!(
                "crop origin ({}, {}) outside image bounds {}x{}",
                rect.x,
                rect.y,
                self.width(),
                self.height()
            )));
        }

        let w = rect.w.min(self.width() - rect.x);
        let h = rect.h.min(self.height() - rect.y);
        let stride = self.stride();
        let row_len = w as usize * BYTES_PER_PIXEL;

        let mut data = Vec::with_capacity(h as usize * row_len);
        for y in rect.y..rect.y + h {
            let start = y as usize * stride + rect.x as usize * BYTES_PER_PIXEL;
            data.extend_from_slice(&self.inner.data[start..start + row_len]);
        }
        Raster::from_rgba(w, h, data)
    }

    /// Convert into a mutable raster if this is the only handle.
    ///
    /// Returns the raster unchanged as `Err` when other handles share
    /// the pixel data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Raster> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Get a mutable raster, cloning the pixel data.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// A mutable RGBA raster image with exclusive pixel data.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a mutable raster filled with opaque white.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero
    /// or the pixel buffer would exceed `usize::MAX` bytes.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: RasterData::new(width, height)?,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Stride in bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to the RGBA bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.inner.width as usize + x as usize) * BYTES_PER_PIXEL;
        let d = &self.inner.data;
        Some(Rgba::new(d[i], d[i + 1], d[i + 2], d[i + 3]))
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let i = (y as usize * self.inner.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.inner.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
        Ok(())
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
