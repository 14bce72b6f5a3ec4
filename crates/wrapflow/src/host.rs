//! The two seams between the layout core and its host framework.

use wrapflow_graphics::Size;
use wrapflow_layout::{Constraints, FlowPlacement, FlowRow};

/// Measures the natural size of one item's rendered representation.
///
/// The layout asks with unbounded constraints: items keep their intrinsic
/// size and are never squeezed to fit a row.
pub trait ItemMeasurer<T> {
    fn measure(&mut self, index: usize, item: &T, constraints: Constraints) -> Size;
}

impl<T, F> ItemMeasurer<T> for F
where
    F: FnMut(usize, &T, Constraints) -> Size,
{
    fn measure(&mut self, index: usize, item: &T, constraints: Constraints) -> Size {
        self(index, item, constraints)
    }
}

/// Renders packed rows.
///
/// Rows arrive top to bottom. Each row is a horizontal run separated by
/// `spacing`; rows are stacked with the same spacing and aligned to the
/// leading edge. `placement` carries the resolved frames for hosts that
/// position children themselves.
pub trait RowRenderer<T> {
    fn begin(&mut self, _spacing: f32, _placement: &FlowPlacement) {}

    fn row(&mut self, row: FlowRow<'_, T>);

    fn end(&mut self) {}
}
