//! Band and segment extraction
//!
//! Segmentation is the same pass applied twice: classify lines with
//! [`classify_run`], merge neighbors with [`collect_runs`]. The first
//! pass walks rows and yields bands; the second walks the columns of
//! one content band and yields segments. Rows can be classified in
//! place, while columns are gathered into a scratch buffer first
//! because their bytes are not contiguous.

use gridcut_core::{BYTES_PER_PIXEL, Raster};

use crate::error::{SegmentError, SegmentResult};
use crate::runs::{RunKind, classify_run, collect_runs};
use crate::tree::{Band, Segment, SliceTree};

/// Split a raster into horizontal bands of blank and content rows.
///
/// Bands tile the full height in order, alternate in kind, and never
/// have zero height. Content bands come back with empty segment
/// lists; use [`segment_columns`] or [`segment`] to fill them.
pub fn segment_rows(raster: &Raster) -> SegmentResult<Vec<Band>> {
    let classes = (0..raster.height()).map(|y| classify_run(raster.row(y)));
    let bands = collect_runs(classes)
        .into_iter()
        .map(|run| match run.kind {
            RunKind::Blank => Band::Blank {
                y: run.start,
                height: run.len,
            },
            RunKind::Content => Band::Content {
                y: run.start,
                height: run.len,
                segments: Vec::new(),
            },
        })
        .collect();
    Ok(bands)
}

/// Split one content band into vertical segments.
///
/// Scans every image column across the band's rows. The returned
/// segments tile the full width in order, alternate in kind, and
/// inherit `y` and `height` from the band.
///
/// # Errors
///
/// Returns [`SegmentError::BlankBand`] when called with a blank band,
/// and [`SegmentError::BandOutOfRange`] when the band's rows fall
/// outside the raster.
pub fn segment_columns(raster: &Raster, band: &Band) -> SegmentResult<Vec<Segment>> {
    match band {
        Band::Blank { y, height } => Err(SegmentError::BlankBand {
            y: *y,
            height: *height,
        }),
        Band::Content { y, height, .. } => columns_in_span(raster, *y, *height),
    }
}

/// Segment the columns of the rows `[y, y + height)`.
fn columns_in_span(raster: &Raster, y: u32, height: u32) -> SegmentResult<Vec<Segment>> {
    let end = y as u64 + height as u64;
    if height == 0 || end > raster.height() as u64 {
        return Err(SegmentError::BandOutOfRange {
            y,
            height,
            image_height: raster.height(),
        });
    }

    let width = raster.width();
    let data = raster.data();
    let stride = raster.stride();

    // One scratch buffer holds a single gathered column, reused for
    // every column of the band.
    let mut column = vec![0u8; height as usize * BYTES_PER_PIXEL];
    let mut kinds = Vec::with_capacity(width as usize);
    for x in 0..width {
        let offset = x as usize * BYTES_PER_PIXEL;
        for (slot, row) in column.chunks_exact_mut(BYTES_PER_PIXEL).zip(y..) {
            let src = row as usize * stride + offset;
            slot.copy_from_slice(&data[src..src + BYTES_PER_PIXEL]);
        }
        kinds.push(classify_run(&column));
    }

    let segments = collect_runs(kinds)
        .into_iter()
        .map(|run| Segment {
            kind: run.kind,
            x: run.start,
            y,
            width: run.len,
            height,
        })
        .collect();
    Ok(segments)
}

/// Segment a raster into its full slice tree.
///
/// Runs [`segment_rows`], then [`segment_columns`] for every content
/// band, and records the raster dimensions alongside the bands.
///
/// # Examples
///
/// ```
/// use gridcut_core::{Raster, Rect, Rgba};
/// use gridcut_segment::{Band, segment};
///
/// // A white canvas with one black square yields three bands, and the
/// // middle band splits into three segments.
/// let mut canvas = Raster::new(30, 30).unwrap().to_mut();
/// canvas.fill_rect(&Rect::new_unchecked(10, 10, 10, 10), Rgba::BLACK);
/// let raster: Raster = canvas.into();
///
/// let tree = segment(&raster).unwrap();
/// assert_eq!(tree.bands().len(), 3);
/// assert_eq!(tree.bands()[1].segments().len(), 3);
/// ```
pub fn segment(raster: &Raster) -> SegmentResult<SliceTree> {
    let mut bands = segment_rows(raster)?;
    for band in &mut bands {
        let Band::Content {
            y,
            height,
            segments,
        } = band
        else {
            continue;
        };
        *segments = columns_in_span(raster, *y, *height)?;
    }
    Ok(SliceTree::new(raster.width(), raster.height(), bands))
}
