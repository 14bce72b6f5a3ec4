//! Layout contracts & policies for wrapflow
//!
//! The row packer and size cache are pure data structures: they know
//! nothing about the host framework and never allocate per item beyond
//! the result they return.

mod alignment;
mod arrangement;
mod constraints;
mod flow;
mod placement;
mod size_cache;

pub use alignment::*;
pub use arrangement::*;
pub use constraints::*;
pub use flow::*;
pub use placement::*;
pub use size_cache::*;

pub use wrapflow_graphics::{EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::alignment::VerticalAlignment;
    pub use crate::arrangement::{Arrangement, LinearArrangement};
    pub use crate::constraints::Constraints;
    pub use crate::flow::{pack_rows, FlowRow, FlowRows};
    pub use crate::placement::FlowPlacement;
    pub use crate::size_cache::SizeCache;
}
