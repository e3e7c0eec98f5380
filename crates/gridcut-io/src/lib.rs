//! Gridcut IO - Image loading and encoding
//!
//! This crate handles getting pixel data in and out of [`Raster`]s:
//!
//! - [`format`] - Magic-byte format detection
//! - [`png`] - PNG decoding (all color types normalized to RGBA) and encoding
//! - [`jpeg`] - JPEG decoding (decode-only; see the module docs)
//! - [`data_url`] - Base64 `data:image/png` URLs for HTML embedding
//!
//! [`read_image`] is the front door: it sniffs the format from the file
//! header and dispatches to the matching decoder.
//!
//! Format support is feature-gated. The `png-format` and `jpeg` features
//! are both enabled by default.

#[cfg(feature = "png-format")]
pub mod data_url;
pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, ImageFormat};

use gridcut_core::Raster;
use std::path::Path;

/// Read an image from a file path, detecting the format from its header.
///
/// Returns [`IoError::UnsupportedFormat`] when the header matches no known
/// format, or when it matches a format whose feature is disabled.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    match detect_format(path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png_file(path),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg_file(path),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support is not compiled in",
            other.extension()
        ))),
    }
}
