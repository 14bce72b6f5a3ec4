//! Pure geometry data for wrapflow
//!
//! This crate contains the point, size, rectangle and inset primitives
//! shared by the layout core and the host boundary.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
