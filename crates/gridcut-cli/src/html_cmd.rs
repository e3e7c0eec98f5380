use std::fs;
use std::path::Path;

use gridcut::markup::{render_html, HtmlOptions};

use crate::shared::{load_raster, segment_raster};

pub fn run(
    file: &Path,
    output: Option<&Path>,
    slices_dir: Option<&Path>,
    title: Option<&str>,
) -> Result<(), i32> {
    let raster = load_raster(file)?;
    let tree = segment_raster(&raster)?;

    let options = HtmlOptions {
        embed: slices_dir.is_none(),
        slice_dir: slices_dir.map(Path::to_path_buf),
        title: title.map(str::to_string),
        ..HtmlOptions::default()
    };

    let html = render_html(&raster, &tree, &options).map_err(|e| {
        eprintln!("Error: failed to render HTML: {e}");
        1
    })?;

    match output {
        Some(path) => fs::write(path, html).map_err(|e| {
            eprintln!("Error: failed to write {}: {e}", path.display());
            1
        })?,
        None => print!("{html}"),
    }

    Ok(())
}
