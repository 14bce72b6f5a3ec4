//! Positions packed rows for the render boundary.
//!
//! Rows are stacked top to bottom with the row spacing between them. Items
//! in a row start at the leading edge, separated by the item spacing, and
//! are aligned vertically inside the row's height (its tallest item).

use std::ops::Range;

use smallvec::SmallVec;
use wrapflow_graphics::{EdgeInsets, Point, Rect, Size};

use crate::alignment::VerticalAlignment;
use crate::arrangement::{Arrangement, LinearArrangement};
use crate::flow::sanitize_spacing;

/// Inline capacity for per-row scratch buffers.
/// Flow rows rarely hold more than a handful of chips.
type RowScratch = SmallVec<[f32; 8]>;

/// Where one item lands in the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    /// Original index of the item.
    pub index: usize,
    /// Row the item was packed into.
    pub row: usize,
    pub rect: Rect,
}

/// Bounds of one row: the union of its item frames.
#[derive(Clone, Debug, PartialEq)]
pub struct RowFrame {
    pub range: Range<usize>,
    pub rect: Rect,
}

/// Parameters for [`place_rows`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementParams {
    pub spacing: f32,
    pub vertical_alignment: VerticalAlignment,
    pub content_padding: EdgeInsets,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            spacing: crate::flow::DEFAULT_SPACING,
            vertical_alignment: VerticalAlignment::default(),
            content_padding: EdgeInsets::ZERO,
        }
    }
}

/// Positioned frames for every item of a packed layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowPlacement {
    /// Item frames in index order.
    pub frames: Vec<ItemFrame>,
    pub rows: Vec<RowFrame>,
    /// Size of the container including its content padding.
    pub content_size: Size,
}

impl FlowPlacement {
    pub fn frame(&self, index: usize) -> Option<&ItemFrame> {
        self.frames.get(index).filter(|frame| frame.index == index)
    }

    /// Frames of the items packed into `row`.
    pub fn row_frames(&self, row: usize) -> &[ItemFrame] {
        self.rows
            .get(row)
            .map(|row| &self.frames[row.range.clone()])
            .unwrap_or(&[])
    }
}

/// Computes item and row frames for `rows`.
///
/// `rows` must tile the item indices from zero, as [`crate::pack_row_ranges`]
/// produces them.
pub fn place_rows<F>(rows: &[Range<usize>], mut size_of: F, params: PlacementParams) -> FlowPlacement
where
    F: FnMut(usize) -> Size,
{
    let spacing = sanitize_spacing(params.spacing);
    let padding = params.content_padding;
    let arrangement = LinearArrangement::spaced_by(spacing);

    let mut frames = Vec::with_capacity(rows.last().map(|range| range.end).unwrap_or(0));
    let mut row_sizes: Vec<Size> = Vec::with_capacity(rows.len());
    let mut row_offsets: Vec<RowScratch> = Vec::with_capacity(rows.len());
    let mut item_sizes: Vec<Size> = Vec::new();

    for range in rows {
        let sizes: SmallVec<[Size; 8]> = range
            .clone()
            .map(|index| size_of(index).clamp_non_negative())
            .collect();
        let widths: RowScratch = sizes.iter().map(|size| size.width).collect();
        let mut positions: RowScratch = SmallVec::from_elem(0.0, widths.len());
        let row_width = arrangement.extent(&widths);
        arrangement.arrange(&widths, &mut positions);

        let row_height = sizes.iter().map(|size| size.height).fold(0.0, f32::max);
        row_sizes.push(Size::new(row_width, row_height));
        row_offsets.push(positions);
        item_sizes.extend(sizes);
    }

    let heights: RowScratch = row_sizes.iter().map(|size| size.height).collect();
    let mut row_tops: RowScratch = SmallVec::from_elem(0.0, heights.len());
    let content_height = arrangement.extent(&heights);
    arrangement.arrange(&heights, &mut row_tops);

    let origin = Point::new(padding.left, padding.top);
    let mut row_frames = Vec::with_capacity(rows.len());
    for (row, range) in rows.iter().enumerate() {
        let row_size = row_sizes[row];
        let row_top = origin.y + row_tops[row];
        for (slot, index) in range.clone().enumerate() {
            let size = item_sizes[index];
            let dy = params.vertical_alignment.align(row_size.height, size.height);
            frames.push(ItemFrame {
                index,
                row,
                rect: Rect::from_origin_size(
                    Point::new(origin.x + row_offsets[row][slot], row_top + dy),
                    size,
                ),
            });
        }
        row_frames.push(RowFrame {
            range: range.clone(),
            rect: Rect::from_origin_size(Point::new(origin.x, row_top), row_size),
        });
    }

    let content_width = row_sizes.iter().map(|size| size.width).fold(0.0, f32::max);
    FlowPlacement {
        frames,
        rows: row_frames,
        content_size: padding.inflate(Size::new(content_width, content_height)),
    }
}

#[cfg(test)]
#[path = "tests/placement_tests.rs"]
mod tests;
