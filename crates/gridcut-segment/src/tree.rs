//! Slice tree data model
//!
//! The result of segmenting a raster: horizontal [`Band`]s tiling the
//! image top to bottom, and within each content band, [`Segment`]s
//! tiling the image width left to right. Values are immutable
//! snapshots; they record geometry and hold no reference back to the
//! pixel data.

use gridcut_core::Rect;

use crate::runs::RunKind;

/// A vertical slice of a content band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Whether the segment's columns are blank or carry content.
    pub kind: RunKind,
    /// Leftmost column of the segment.
    pub x: u32,
    /// Top row, inherited from the owning band.
    pub y: u32,
    /// Width in pixels, always at least 1.
    pub width: u32,
    /// Height in pixels, inherited from the owning band.
    pub height: u32,
}

impl Segment {
    /// The region this segment covers, in image coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new_unchecked(self.x, self.y, self.width, self.height)
    }
}

/// A horizontal slice of the image.
///
/// Blank bands consist entirely of background rows and are never
/// subdivided, so they carry no segments by construction. Content
/// bands carry the column segments found within them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// Rows made up entirely of background pixels.
    Blank { y: u32, height: u32 },
    /// Rows containing at least one content pixel, subdivided into
    /// column segments.
    Content {
        y: u32,
        height: u32,
        segments: Vec<Segment>,
    },
}

impl Band {
    /// Top row of the band.
    #[inline]
    pub fn y(&self) -> u32 {
        match self {
            Band::Blank { y, .. } | Band::Content { y, .. } => *y,
        }
    }

    /// Number of rows in the band, always at least 1.
    #[inline]
    pub fn height(&self) -> u32 {
        match self {
            Band::Blank { height, .. } | Band::Content { height, .. } => *height,
        }
    }

    /// The band's classification.
    pub fn kind(&self) -> RunKind {
        match self {
            Band::Blank { .. } => RunKind::Blank,
            Band::Content { .. } => RunKind::Content,
        }
    }

    /// Whether this is a blank band.
    pub fn is_blank(&self) -> bool {
        matches!(self, Band::Blank { .. })
    }

    /// The band's column segments. Blank bands have none.
    pub fn segments(&self) -> &[Segment] {
        match self {
            Band::Blank { .. } => &[],
            Band::Content { segments, .. } => segments,
        }
    }

    /// The region this band covers in an image of the given width.
    pub fn rect(&self, image_width: u32) -> Rect {
        Rect::new_unchecked(0, self.y(), image_width, self.height())
    }
}

/// The full segmentation of a raster.
///
/// Bands partition the image rows top to bottom; within each content
/// band, segments partition the columns left to right. The tree
/// records the source dimensions so consumers can reason about
/// geometry without the raster at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceTree {
    width: u32,
    height: u32,
    bands: Vec<Band>,
}

impl SliceTree {
    /// Assemble a tree from its parts.
    pub fn new(width: u32, height: u32, bands: Vec<Band>) -> Self {
        Self {
            width,
            height,
            bands,
        }
    }

    /// Width of the segmented raster.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the segmented raster.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The bands in top-to-bottom order.
    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Total number of content segments across all bands.
    pub fn content_segment_count(&self) -> usize {
        self.bands
            .iter()
            .flat_map(|band| band.segments())
            .filter(|segment| segment.kind == RunKind::Content)
            .count()
    }
}
