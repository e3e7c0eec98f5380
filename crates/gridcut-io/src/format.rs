//! Image format detection
//!
//! Formats are identified by magic bytes at the start of the data,
//! never by file extension.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IoError, IoResult};

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG (read-only)
    Jpeg,
}

impl ImageFormat {
    /// Canonical file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

/// Magic bytes identifying each supported format.
mod magic {
    /// PNG signature
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    /// JPEG SOI marker plus the next marker's lead byte
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Detect the image format from leading bytes.
///
/// Returns `None` when the bytes match no supported format.
pub fn detect_format_from_bytes(data: &[u8]) -> Option<ImageFormat> {
    if data.starts_with(magic::PNG) {
        Some(ImageFormat::Png)
    } else if data.starts_with(magic::JPEG) {
        Some(ImageFormat::Jpeg)
    } else {
        None
    }
}

/// Detect the format of an image file by reading its header.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the header matches no
/// supported format, or an I/O error if the file cannot be read.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let n = file.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
        .ok_or_else(|| IoError::UnsupportedFormat("unrecognized file header".to_string()))
}
