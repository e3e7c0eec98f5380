//! Run-length scanning primitives
//!
//! Both segmentation axes reduce to the same two steps: classify each
//! line (a row, or a gathered column) as blank or content, then merge
//! equal neighbors into maximal runs with [`collect_runs`]. The merge
//! is shared so rows and columns can never drift apart in behavior.

use gridcut_core::BYTES_PER_PIXEL;

/// Classification of a line as background or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunKind {
    /// Every pixel is opaque white.
    Blank,
    /// At least one pixel differs from opaque white.
    Content,
}

/// A maximal stretch of equally classified lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    /// Index of the first line in the run.
    pub start: u32,
    /// Number of lines in the run, always at least 1.
    pub len: u32,
}

/// Byte pattern of a background pixel: opaque white RGBA.
const OPAQUE_WHITE: [u8; BYTES_PER_PIXEL] = [255; BYTES_PER_PIXEL];

/// Check whether every pixel in a line is the background color.
///
/// `samples` holds the line's pixels as RGBA bytes. The test is exact
/// equality against opaque white `(255, 255, 255, 255)`: a deviation
/// in any channel of any pixel, including alpha, makes the line
/// content. Near-white pixels are not blank; callers wanting tolerance
/// must quantize the buffer first.
pub fn is_blank_run(samples: &[u8]) -> bool {
    samples
        .chunks_exact(BYTES_PER_PIXEL)
        .all(|quad| quad == OPAQUE_WHITE)
}

/// Classify a line of RGBA samples.
pub fn classify_run(samples: &[u8]) -> RunKind {
    if is_blank_run(samples) {
        RunKind::Blank
    } else {
        RunKind::Content
    }
}

/// Merge a sequence of per-line classifications into maximal runs.
///
/// A run opens at the first line and extends while the classification
/// stays the same; a change seals the open run and starts the next
/// one. The final run is sealed when the input ends. The returned runs
/// tile the input exactly, in order, alternating in kind, with every
/// length at least 1.
pub fn collect_runs<I>(classes: I) -> Vec<Run>
where
    I: IntoIterator<Item = RunKind>,
{
    let mut runs = Vec::new();
    let mut open: Option<(RunKind, u32)> = None;
    let mut pos: u32 = 0;

    for kind in classes {
        match open {
            Some((current, _)) if current == kind => {}
            Some((current, start)) => {
                runs.push(Run {
                    kind: current,
                    start,
                    len: pos - start,
                });
                open = Some((kind, pos));
            }
            None => open = Some((kind, pos)),
        }
        pos += 1;
    }

    if let Some((kind, start)) = open {
        runs.push(Run {
            kind,
            start,
            len: pos - start,
        });
    }
    runs
}
