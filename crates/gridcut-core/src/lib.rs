//! Core raster data structures for gridcut
//!
//! This crate provides the shared building blocks used across the
//! gridcut workspace:
//!
//! - [`Raster`] / [`RasterMut`]: reference-counted RGBA image containers
//! - [`Rect`]: rectangular regions in image coordinates
//! - [`Rgba`]: 8-bit-per-channel color values
//! - [`Error`] / [`Result`]: common error handling
//!
//! # Examples
//!
//! ```
//! use gridcut_core::{Raster, Rect, Rgba};
//!
//! // Draw a black square on a white canvas, then crop it out.
//! let mut canvas = Raster::new(100, 100).unwrap().to_mut();
//! canvas.fill_rect(&Rect::new_unchecked(10, 10, 20, 20), Rgba::BLACK);
//! let raster: Raster = canvas.into();
//!
//! let square = raster.crop(&Rect::new_unchecked(10, 10, 20, 20)).unwrap();
//! assert_eq!(square.pixel(0, 0), Some(Rgba::BLACK));
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod raster;
pub mod rect;

pub use color::Rgba;
pub use error::{Error, Result};
pub use raster::{BYTES_PER_PIXEL, Raster, RasterMut};
pub use rect::Rect;
