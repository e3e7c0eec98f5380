//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB, and
//! CMYK streams are all normalized to 8-bit RGBA with an opaque alpha
//! channel.
//!
//! **Note:** JPEG *writing* is not implemented because the `jpeg-decoder`
//! crate is decode-only. Rasters loaded from JPEG are written back out as
//! PNG.

use crate::error::{IoError, IoResult};
use gridcut_core::Raster;
use jpeg_decoder::{Decoder, PixelFormat};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a JPEG image from a reader.
///
/// The reader must be positioned at the SOI marker (`FF D8`). The decoded
/// scan is expanded to RGBA regardless of the source pixel format; JPEG
/// carries no alpha, so every pixel comes out opaque.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode failed: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG stream has no frame header".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);

    match info.pixel_format {
        PixelFormat::L8 => {
            for &g in &pixels {
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        PixelFormat::L16 => {
            // Big-endian samples; keep the high byte.
            for pair in pixels.chunks_exact(2) {
                let g = pair[0];
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        PixelFormat::RGB24 => {
            for px in pixels.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        PixelFormat::CMYK32 => {
            // Adobe-style inverted CMYK as produced by jpeg-decoder.
            for px in pixels.chunks_exact(4) {
                let k = px[3] as u16;
                let r = (px[0] as u16 * k / 255) as u8;
                let g = (px[1] as u16 * k / 255) as u8;
                let b = (px[2] as u16 * k / 255) as u8;
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }
    }

    Ok(Raster::from_rgba(width, height, rgba)?)
}

/// Read a JPEG image from a file path.
pub fn read_jpeg_file<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_jpeg(BufReader::new(file))
}
