//! Data URL encoding for rasters
//!
//! Encodes a [`Raster`] as a base64 `data:image/png` URL so it can be
//! embedded directly in an `img` element without touching the filesystem.

use crate::error::IoResult;
use crate::png::write_png;
use base64::{engine::general_purpose, Engine as _};
use gridcut_core::Raster;

/// Encode a raster as PNG bytes in memory.
pub fn png_bytes(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(raster, &mut bytes)?;
    Ok(bytes)
}

/// Encode a raster as a `data:image/png;base64,...` URL.
///
/// # Example
/// ```
/// use gridcut_core::Raster;
/// use gridcut_io::data_url::to_png_data_url;
///
/// let raster = Raster::new(2, 2).unwrap();
/// let url = to_png_data_url(&raster).unwrap();
/// assert!(url.starts_with("data:image/png;base64,"));
/// ```
pub fn to_png_data_url(raster: &Raster) -> IoResult<String> {
    let bytes = png_bytes(raster)?;
    let encoded = general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:image/png;base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::read_png;
    use base64::engine::general_purpose;
    use gridcut_core::Rgba;
    use std::io::Cursor;

    #[test]
    fn test_png_bytes_magic() {
        let raster = Raster::new(3, 3).unwrap();
        let bytes = png_bytes(&raster).unwrap();
        assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_data_url_prefix() {
        let raster = Raster::new(1, 1).unwrap();
        let url = to_png_data_url(&raster).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_url_payload_decodes() {
        let mut canvas = gridcut_core::RasterMut::new(2, 1).unwrap();
        canvas.set_pixel(0, 0, Rgba::new(10, 20, 30, 255)).unwrap();
        let raster: Raster = canvas.into();

        let url = to_png_data_url(&raster).unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = general_purpose::STANDARD.decode(payload).unwrap();

        let decoded = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.pixel(0, 0), Some(Rgba::new(10, 20, 30, 255)));
    }
}
