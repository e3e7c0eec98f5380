use std::path::Path;

use gridcut::{render_overlay, OverlayOptions};

use crate::shared::{load_raster, segment_raster};

pub fn run(file: &Path, output: &Path) -> Result<(), i32> {
    let raster = load_raster(file)?;
    let tree = segment_raster(&raster)?;

    let preview = render_overlay(&raster, &tree, &OverlayOptions::default()).map_err(|e| {
        eprintln!("Error: failed to render overlay: {e}");
        1
    })?;

    gridcut::io::png::write_png_file(&preview, output).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;

    eprintln!("Wrote {}", output.display());
    Ok(())
}
