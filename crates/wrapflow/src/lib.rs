//! Wrapping flow layout for declarative UI hosts.
//!
//! [`FlowLayout`] arranges an ordered collection of items left to right and
//! starts a new row whenever the next item would overflow the container.
//! Item sizes are unknown until the host has rendered each item once, so
//! layout runs as a feedback loop:
//!
//! 1. the host renders the current rows (unmeasured items use a placeholder
//!    size),
//! 2. the host reports every item's natural size through
//!    [`FlowLayout::on_item_measured`],
//! 3. the layout re-packs and notifies its observers, and the host renders
//!    again.
//!
//! The host talks to the layout only through [`ItemMeasurer`] and
//! [`RowRenderer`] plus the two inbound callbacks.

mod flow_layout;
mod handle;
mod host;
mod options;

pub use flow_layout::{FlowLayout, Invalidation};
pub use handle::FlowLayoutHandle;
pub use host::{ItemMeasurer, RowRenderer};
pub use options::FlowOptions;

pub use wrapflow_core::ObserverHandle;
pub use wrapflow_graphics::{EdgeInsets, Point, Rect, Size};
pub use wrapflow_layout::{
    Constraints, FlowPlacement, FlowRow, FlowRows, ItemFrame, RowFrame, SizeCache,
    VerticalAlignment, DEFAULT_ITEM_SIZE, DEFAULT_SPACING,
};

pub mod prelude {
    pub use crate::flow_layout::{FlowLayout, Invalidation};
    pub use crate::handle::FlowLayoutHandle;
    pub use crate::host::{ItemMeasurer, RowRenderer};
    pub use crate::options::FlowOptions;
    pub use wrapflow_graphics::{EdgeInsets, Size};
    pub use wrapflow_layout::{Constraints, FlowPlacement, FlowRow};
}
