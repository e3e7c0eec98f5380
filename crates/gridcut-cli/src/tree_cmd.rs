use std::path::Path;

use gridcut::{RunKind, SliceTree};

use crate::cli::TreeFormat;
use crate::shared::{load_raster, segment_raster};

pub fn run(file: &Path, format: &TreeFormat) -> Result<(), i32> {
    let raster = load_raster(file)?;
    let tree = segment_raster(&raster)?;

    match format {
        TreeFormat::Text => print_text(&tree),
        TreeFormat::Json => {
            let json = serde_json::to_string_pretty(&tree).map_err(|e| {
                eprintln!("Error: failed to serialize tree: {e}");
                1
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_text(tree: &SliceTree) {
    println!(
        "image {}x{} ({} bands, {} content segments)",
        tree.width(),
        tree.height(),
        tree.bands().len(),
        tree.content_segment_count()
    );
    for band in tree.bands() {
        println!(
            "band {} y={} h={}",
            kind_str(band.kind()),
            band.y(),
            band.height()
        );
        for segment in band.segments() {
            println!(
                "  segment {} x={} w={}",
                kind_str(segment.kind),
                segment.x,
                segment.width
            );
        }
    }
}

fn kind_str(kind: RunKind) -> &'static str {
    match kind {
        RunKind::Blank => "blank",
        RunKind::Content => "content",
    }
}
