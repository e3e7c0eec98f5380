use std::fs;
use std::path::Path;

use gridcut::{Raster, Rect, RunKind};

use crate::shared::{load_raster, segment_raster};

pub fn run(file: &Path, output_dir: &Path, blank: bool) -> Result<(), i32> {
    let raster = load_raster(file)?;
    let tree = segment_raster(&raster)?;

    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| {
            eprintln!("Error creating directory {}: {e}", output_dir.display());
            1
        })?;
    }

    let mut count = 0;
    for band in tree.bands() {
        if band.is_blank() {
            if blank {
                write_slice(&raster, &band.rect(tree.width()), output_dir, &mut count)?;
            }
            continue;
        }
        for segment in band.segments() {
            if segment.kind == RunKind::Blank && !blank {
                continue;
            }
            write_slice(&raster, &segment.rect(), output_dir, &mut count)?;
        }
    }

    if count == 0 {
        eprintln!("No slices written.");
    } else {
        eprintln!("Wrote {count} slice(s).");
    }

    Ok(())
}

fn write_slice(raster: &Raster, rect: &Rect, dir: &Path, count: &mut usize) -> Result<(), i32> {
    let crop = raster.crop(rect).map_err(|e| {
        eprintln!("Error cropping slice: {e}");
        1
    })?;

    let path = dir.join(format!("slice_{count}.png"));
    gridcut::io::png::write_png_file(&crop, &path).map_err(|e| {
        eprintln!("Error writing {}: {e}", path.display());
        1
    })?;

    eprintln!("Wrote {}", path.display());
    *count += 1;
    Ok(())
}
