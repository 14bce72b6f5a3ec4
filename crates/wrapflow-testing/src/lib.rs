//! Testing utilities and harness for wrapflow
//!
//! Provides a headless host: a measurer backed by a size table, a renderer
//! that records what it was handed, and a harness that runs the
//! render/measure feedback loop until the layout settles.

pub mod assertions;
pub mod harness;
pub mod host;

pub use assertions::*;
pub use harness::FlowHarness;
pub use host::{RecordedFrame, RecordingRenderer, SizeTableMeasurer};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::harness::FlowHarness;
    pub use crate::host::{RecordedFrame, RecordingRenderer, SizeTableMeasurer};
}
