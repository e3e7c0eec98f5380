//! HTML table rendering for slice trees.
//!
//! Walks a [`SliceTree`] and emits a `<table>` that reassembles the
//! source image from its slices: one `<tr>` per band, one `<td>` per
//! segment. Content cells carry the cropped sub-image; blank cells
//! carry a shared 1x1 transparent filler stretched to size by its
//! width/height attributes, so blank regions cost a few bytes instead
//! of a full crop.

use crate::error::{MarkupError, MarkupResult};
use gridcut_core::Raster;
use gridcut_io::data_url::to_png_data_url;
use gridcut_io::png::write_png_file;
use gridcut_segment::{Band, RunKind, SliceTree};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for HTML rendering.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Embed slice images as base64 data URLs. When false, slices are
    /// written as PNG files into `slice_dir` instead.
    pub embed: bool,
    /// Directory slice files are written to when `embed` is false.
    /// `src` attributes use this same path, so give it relative to
    /// where the document will live.
    pub slice_dir: Option<PathBuf>,
    /// Document title for [`render_html`].
    pub title: Option<String>,
    /// Emit rows and cells on indented lines rather than one long line.
    pub indent: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            embed: true,
            slice_dir: None,
            title: None,
            indent: true,
        }
    }
}

/// Render the reassembly table for a slice tree.
///
/// Produces just the `<table>` element. The page embedding it needs
/// `border-collapse: collapse`, zero cell padding, and block-level
/// images for the slices to butt together seamlessly; [`render_html`]
/// emits a standalone document with those rules included.
pub fn render_table(
    raster: &Raster,
    tree: &SliceTree,
    options: &HtmlOptions,
) -> MarkupResult<String> {
    if tree.width() != raster.width() || tree.height() != raster.height() {
        return Err(MarkupError::TreeMismatch {
            tree_width: tree.width(),
            tree_height: tree.height(),
            raster_width: raster.width(),
            raster_height: raster.height(),
        });
    }

    let mut sink = SliceSink::new(options)?;

    // Blank bands span the widest row of the table.
    let span = tree
        .bands()
        .iter()
        .map(|band| band.segments().len().max(1))
        .max()
        .unwrap_or(1);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(tree.bands().len());
    for band in tree.bands() {
        let mut cells = Vec::new();
        match band {
            Band::Blank { height, .. } => {
                let img = img_tag(&sink.filler_src()?, tree.width(), *height);
                if span > 1 {
                    cells.push(format!("<td colspan=\"{span}\">{img}</td>"));
                } else {
                    cells.push(format!("<td>{img}</td>"));
                }
            }
            Band::Content { segments, .. } => {
                for segment in segments {
                    let img = match segment.kind {
                        RunKind::Blank => {
                            img_tag(&sink.filler_src()?, segment.width, segment.height)
                        }
                        RunKind::Content => {
                            let crop = raster.crop(&segment.rect())?;
                            img_tag(&sink.content_src(&crop)?, segment.width, segment.height)
                        }
                    };
                    cells.push(format!("<td>{img}</td>"));
                }
            }
        }
        rows.push(cells);
    }

    Ok(assemble_table(&rows, options.indent))
}

/// Render a complete standalone HTML document reassembling the image.
///
/// Wraps [`render_table`] in a doctype, head, and a stylesheet that
/// collapses table borders, zeroes cell padding, and makes slice
/// images block-level.
pub fn render_html(
    raster: &Raster,
    tree: &SliceTree,
    options: &HtmlOptions,
) -> MarkupResult<String> {
    let table = render_table(raster, tree, options)?;
    let title = escape_html(options.title.as_deref().unwrap_or("sliced image"));

    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str("table { border-collapse: collapse; }\n");
    html.push_str("td { padding: 0; }\n");
    html.push_str("img { display: block; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&table);
    html.push_str("\n</body>\n</html>\n");
    Ok(html)
}

/// Where slice images go: inline data URLs or numbered files.
enum SliceSink<'a> {
    Embed {
        filler: Option<String>,
    },
    Files {
        dir: &'a Path,
        next: usize,
        filler: Option<String>,
    },
}

impl<'a> SliceSink<'a> {
    fn new(options: &'a HtmlOptions) -> MarkupResult<Self> {
        if options.embed {
            return Ok(SliceSink::Embed { filler: None });
        }
        let dir = options
            .slice_dir
            .as_deref()
            .ok_or(MarkupError::MissingSliceDir)?;
        fs::create_dir_all(dir)?;
        Ok(SliceSink::Files {
            dir,
            next: 0,
            filler: None,
        })
    }

    /// The `src` for a content cell's cropped image.
    fn content_src(&mut self, crop: &Raster) -> MarkupResult<String> {
        match self {
            SliceSink::Embed { .. } => Ok(to_png_data_url(crop)?),
            SliceSink::Files { dir, next, .. } => {
                let name = format!("slice_{next}.png");
                *next += 1;
                let path = dir.join(name);
                write_png_file(crop, &path)?;
                Ok(path.display().to_string())
            }
        }
    }

    /// The `src` for a blank cell. Encoded or written once, then reused.
    fn filler_src(&mut self) -> MarkupResult<String> {
        match self {
            SliceSink::Embed { filler } => {
                if let Some(src) = filler {
                    return Ok(src.clone());
                }
                let src = to_png_data_url(&filler_pixel()?)?;
                *filler = Some(src.clone());
                Ok(src)
            }
            SliceSink::Files { dir, filler, .. } => {
                if let Some(src) = filler {
                    return Ok(src.clone());
                }
                let path = dir.join("blank.png");
                write_png_file(&filler_pixel()?, &path)?;
                let src = path.display().to_string();
                *filler = Some(src.clone());
                Ok(src)
            }
        }
    }
}

/// The shared 1x1 fully transparent filler image.
fn filler_pixel() -> MarkupResult<Raster> {
    Ok(Raster::from_rgba(1, 1, vec![0; 4])?)
}

fn img_tag(src: &str, width: u32, height: u32) -> String {
    format!(
        "<img src=\"{}\" width=\"{width}\" height=\"{height}\" alt=\"\">",
        escape_html(src)
    )
}

fn assemble_table(rows: &[Vec<String>], indent: bool) -> String {
    let mut html = String::from("<table>");
    for cells in rows {
        if indent {
            html.push_str("\n  <tr>");
            for cell in cells {
                html.push_str("\n    ");
                html.push_str(cell);
            }
            html.push_str("\n  </tr>");
        } else {
            html.push_str("<tr>");
            for cell in cells {
                html.push_str(cell);
            }
            html.push_str("</tr>");
        }
    }
    if indent {
        html.push('\n');
    }
    html.push_str("</table>");
    html
}

/// Escape special HTML characters.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
