use std::path::Path;

use gridcut::{Raster, SliceTree};

/// Load an image file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or cannot be decoded.
pub fn load_raster(file: &Path) -> Result<Raster, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    gridcut::io::read_image(file).map_err(|e| {
        eprintln!("Error: failed to read image: {e}");
        1
    })
}

/// Segment a raster into its slice tree.
pub fn segment_raster(raster: &Raster) -> Result<SliceTree, i32> {
    gridcut::segment(raster).map_err(|e| {
        eprintln!("Error: segmentation failed: {e}");
        1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_raster_file_not_found() {
        let result = load_raster(Path::new("/nonexistent/image.png"));
        match result {
            Err(code) => assert_eq!(code, 1),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn segment_raster_blank_canvas() {
        let raster = Raster::new(4, 4).unwrap();
        let tree = segment_raster(&raster).unwrap();
        assert_eq!(tree.bands().len(), 1);
    }
}
