//! Greedy row packing for flow layouts.
//!
//! Items are placed left to right; an item that would push the current row
//! past the available width starts a new row. The packer never reorders,
//! so every row is a contiguous run of indices and is stored as a
//! `Range<usize>`.
//!
//! An item wider than the available width on its own still gets a row of
//! its own: the wrap check only applies to rows that already hold an item.

use std::fmt;
use std::ops::Range;

use wrapflow_graphics::Size;

/// Default gap between items and between rows.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Clamps a NaN or negative extent to zero, logging the contract violation.
///
/// Positive infinity is a valid available width (unbounded container) and
/// is returned unchanged.
pub fn sanitize_extent(value: f32, what: &str) -> f32 {
    if value.is_nan() || value < 0.0 {
        log::warn!("flow layout: {what} {value} is not a valid extent, using 0");
        0.0
    } else {
        value
    }
}

/// Like [`sanitize_extent`] but also rejects infinity.
pub fn sanitize_spacing(value: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("flow layout: spacing {value} is not finite, using 0");
        return 0.0;
    }
    sanitize_extent(value, "spacing")
}

/// Packs `count` items into rows and returns the index range of each row.
///
/// `size_of` is asked for every index exactly once, in order. Width
/// equality fits: a row wraps only when its width would strictly exceed
/// `available_width`. Zero items produce a single empty row.
pub fn pack_row_ranges<F>(
    count: usize,
    mut size_of: F,
    available_width: f32,
    spacing: f32,
) -> Vec<Range<usize>>
where
    F: FnMut(usize) -> Size,
{
    let available_width = sanitize_extent(available_width, "available width");
    let spacing = sanitize_spacing(spacing);

    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut row_width = 0.0_f32;

    for index in 0..count {
        let width = sanitize_extent(size_of(index).width, "item width");

        let additional = if index == row_start {
            width
        } else {
            spacing + width
        };
        if index > row_start && row_width + additional > available_width {
            rows.push(row_start..index);
            row_start = index;
            row_width = width;
        } else {
            row_width += additional;
        }
    }

    if row_start < count {
        rows.push(row_start..count);
    }
    if rows.is_empty() {
        rows.push(0..0);
    }

    log::trace!(
        "packed {count} items into {} rows (available width {available_width}, spacing {spacing})",
        rows.len()
    );
    rows
}

/// Packs `items` into rows. See [`pack_row_ranges`].
pub fn pack_rows<T, F>(items: &[T], size_of: F, available_width: f32, spacing: f32) -> FlowRows<'_, T>
where
    F: FnMut(usize) -> Size,
{
    let ranges = pack_row_ranges(items.len(), size_of, available_width, spacing);
    FlowRows::new(items, ranges)
}

/// The rows produced by one packing pass, borrowing the packed items.
pub struct FlowRows<'a, T> {
    items: &'a [T],
    ranges: Vec<Range<usize>>,
}

impl<'a, T> FlowRows<'a, T> {
    /// Wraps row ranges previously produced for `items`.
    ///
    /// The ranges must tile `0..items.len()` in order; an empty item list is
    /// represented by the single range `0..0`.
    pub fn new(items: &'a [T], ranges: Vec<Range<usize>>) -> Self {
        debug_assert!(ranges_tile(&ranges, items.len()), "row ranges must tile the items");
        Self { items, ranges }
    }

    /// Number of rows. Never zero for a packed result.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn row(&self, row: usize) -> Option<FlowRow<'a, T>> {
        let range = self.ranges.get(row)?.clone();
        Some(FlowRow::new(row, range, self.items))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = FlowRow<'a, T>> + '_ {
        let items = self.items;
        self.ranges
            .iter()
            .enumerate()
            .map(move |(row, range)| FlowRow::new(row, range.clone(), items))
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Every `(index, item)` pair in row order, which is the input order.
    pub fn items(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        self.rows().flat_map(|row| row.iter())
    }

    /// The row holding `index`, if it is in range.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        // Ranges are sorted and contiguous.
        let row = self.ranges.partition_point(|range| range.end <= index);
        Some(row)
    }

    /// Row contents as plain index lists.
    pub fn index_rows(&self) -> Vec<Vec<usize>> {
        self.ranges.iter().map(|range| range.clone().collect()).collect()
    }
}

impl<T> Clone for FlowRows<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            ranges: self.ranges.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FlowRows<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges && self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for FlowRows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// One packed row: an ordered run of `(index, item)` pairs.
pub struct FlowRow<'a, T> {
    row: usize,
    range: Range<usize>,
    items: &'a [T],
}

impl<'a, T> FlowRow<'a, T> {
    fn new(row: usize, range: Range<usize>, all_items: &'a [T]) -> Self {
        let items = &all_items[range.clone()];
        Self { row, range, items }
    }

    /// Position of this row within the layout, counted from the top.
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Original indices covered by this row.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn indices(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &'a T)> {
        self.range.clone().zip(self.items.iter())
    }
}

impl<T> Clone for FlowRow<'_, T> {
    fn clone(&self) -> Self {
        Self {
            row: self.row,
            range: self.range.clone(),
            items: self.items,
        }
    }
}

impl<T: PartialEq> PartialEq for FlowRow<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.range == other.range && self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for FlowRow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

fn ranges_tile(ranges: &[Range<usize>], len: usize) -> bool {
    if len == 0 {
        return ranges.len() == 1 && ranges[0] == (0..0);
    }
    let mut expected_start = 0;
    for range in ranges {
        if range.start != expected_start || range.end <= range.start {
            return false;
        }
        expected_start = range.end;
    }
    expected_start == len
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
