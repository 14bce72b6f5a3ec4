//! Assertion utilities for flow layout tests

use wrapflow::{FlowPlacement, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that concatenating `rows` yields `0..count` in order.
pub fn assert_rows_preserve_order(rows: &[Vec<usize>], count: usize) {
    let flattened: Vec<usize> = rows.iter().flatten().copied().collect();
    let expected: Vec<usize> = (0..count).collect();
    assert_eq!(flattened, expected, "rows {:?} reorder or drop items", rows);
}

/// Assert that every multi-item row fits into `available_width`.
pub fn assert_rows_fit(placement: &FlowPlacement, available_width: f32) {
    for (row, frame) in placement.rows.iter().enumerate() {
        if frame.range.len() > 1 {
            assert!(
                frame.rect.width <= available_width,
                "row {} is {} wide, available {}",
                row,
                frame.rect.width,
                available_width
            );
        }
    }
}

/// Assert that no two item frames overlap.
pub fn assert_no_overlap(placement: &FlowPlacement) {
    for (i, a) in placement.frames.iter().enumerate() {
        for b in &placement.frames[i + 1..] {
            assert!(
                !a.rect.intersects(&b.rect),
                "items {} {:?} and {} {:?} overlap",
                a.index,
                a.rect,
                b.index,
                b.rect
            );
        }
    }
}
