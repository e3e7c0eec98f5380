//! Segmentation regression test - structural invariants
//!
//! Verifies the partition, alternation, and determinism guarantees of
//! the slice tree on synthetic rasters, plus boundary scaling when the
//! same pattern is drawn at a larger size.

use gridcut_core::{Raster, Rect, Rgba};
use gridcut_segment::{Band, RunKind, SliceTree, segment};

/// Draw black squares at the given rectangles on a white canvas.
fn drawn_raster(width: u32, height: u32, squares: &[Rect]) -> Raster {
    let mut canvas = Raster::new(width, height).unwrap().to_mut();
    for rect in squares {
        canvas.fill_rect(rect, Rgba::BLACK);
    }
    canvas.into()
}

/// Assert the partition and alternation invariants for a whole tree.
fn assert_tree_invariants(tree: &SliceTree) {
    // Bands tile [0, height) in order.
    let mut y = 0;
    for band in tree.bands() {
        assert_eq!(band.y(), y, "band does not start where the previous ended");
        assert!(band.height() >= 1, "zero-height band");
        y += band.height();
    }
    assert_eq!(y, tree.height(), "bands do not cover the full height");

    // Adjacent bands alternate in kind.
    for pair in tree.bands().windows(2) {
        assert_ne!(pair[0].kind(), pair[1].kind(), "adjacent bands share a kind");
    }

    for band in tree.bands() {
        match band {
            Band::Blank { .. } => assert!(band.segments().is_empty()),
            Band::Content { segments, .. } => {
                assert!(!segments.is_empty(), "content band with no segments");

                // Segments tile [0, width) in order.
                let mut x = 0;
                for segment in segments {
                    assert_eq!(segment.x, x, "segment does not start where the previous ended");
                    assert!(segment.width >= 1, "zero-width segment");
                    assert_eq!(segment.y, band.y());
                    assert_eq!(segment.height, band.height());
                    x += segment.width;
                }
                assert_eq!(x, tree.width(), "segments do not cover the full width");

                // Adjacent segments alternate in kind.
                for pair in segments.windows(2) {
                    assert_ne!(pair[0].kind, pair[1].kind, "adjacent segments share a kind");
                }
            }
        }
    }
}

#[test]
fn segment_reg() {
    // --- Test 1: Invariants on a two-row layout of squares ---
    let raster = drawn_raster(
        64,
        48,
        &[
            Rect::new_unchecked(4, 4, 12, 10),
            Rect::new_unchecked(30, 6, 20, 8),
            Rect::new_unchecked(10, 30, 8, 12),
        ],
    );
    let tree = segment(&raster).unwrap();
    assert_tree_invariants(&tree);

    // Two content bands separated by blank bands.
    let content: Vec<&Band> = tree.bands().iter().filter(|b| !b.is_blank()).collect();
    assert_eq!(content.len(), 2);

    // The first content band holds the two top squares.
    assert_eq!(content[0].y(), 4);
    assert_eq!(content[0].height(), 10);
    assert_eq!(
        content[0]
            .segments()
            .iter()
            .filter(|s| s.kind == RunKind::Content)
            .count(),
        2
    );

    // --- Test 2: Invariants on edge-touching content ---
    let raster = drawn_raster(
        32,
        32,
        &[
            Rect::new_unchecked(0, 0, 8, 8),
            Rect::new_unchecked(24, 24, 8, 8),
        ],
    );
    let tree = segment(&raster).unwrap();
    assert_tree_invariants(&tree);
    assert_eq!(tree.bands().len(), 3);
    assert!(!tree.bands()[0].is_blank());
    assert!(tree.bands()[1].is_blank());
    assert!(!tree.bands()[2].is_blank());

    // --- Test 3: Determinism across repeated runs ---
    let raster = drawn_raster(
        40,
        40,
        &[
            Rect::new_unchecked(3, 3, 5, 5),
            Rect::new_unchecked(20, 10, 10, 17),
        ],
    );
    let first = segment(&raster).unwrap();
    for _ in 0..3 {
        assert_eq!(segment(&raster).unwrap(), first);
    }

    // --- Test 4: Fully blank and fully content degenerate gracefully ---
    let blank = Raster::new(16, 16).unwrap();
    let tree = segment(&blank).unwrap();
    assert_tree_invariants(&tree);
    assert_eq!(tree.bands().len(), 1);
    assert!(tree.bands()[0].is_blank());

    let full = drawn_raster(16, 16, &[Rect::new_unchecked(0, 0, 16, 16)]);
    let tree = segment(&full).unwrap();
    assert_tree_invariants(&tree);
    assert_eq!(tree.bands().len(), 1);
    assert_eq!(tree.bands()[0].segments().len(), 1);
}

#[test]
fn segment_reg_scaling() {
    // The same pattern drawn at 1x and 2x produces the same tree shape
    // with every boundary doubled.
    let base = [
        Rect::new_unchecked(2, 2, 4, 3),
        Rect::new_unchecked(10, 5, 5, 6),
    ];
    let scaled: Vec<Rect> = base
        .iter()
        .map(|r| Rect::new_unchecked(r.x * 2, r.y * 2, r.w * 2, r.h * 2))
        .collect();

    let small = segment(&drawn_raster(20, 14, &base)).unwrap();
    let large = segment(&drawn_raster(40, 28, &scaled)).unwrap();
    assert_tree_invariants(&small);
    assert_tree_invariants(&large);

    assert_eq!(small.bands().len(), large.bands().len());
    for (a, b) in small.bands().iter().zip(large.bands()) {
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.y() * 2, b.y());
        assert_eq!(a.height() * 2, b.height());

        assert_eq!(a.segments().len(), b.segments().len());
        for (sa, sb) in a.segments().iter().zip(b.segments()) {
            assert_eq!(sa.kind, sb.kind);
            assert_eq!(sa.x * 2, sb.x);
            assert_eq!(sa.width * 2, sb.width);
        }
    }
}
