//! Runs the render/measure feedback loop headlessly.

use std::cell::RefCell;
use std::rc::Rc;

use wrapflow::{FlowLayout, FlowLayoutHandle, FlowPlacement, Invalidation, ObserverHandle};

use crate::host::{RecordedFrame, RecordingRenderer, SizeTableMeasurer};

/// Maximum render/measure passes before [`FlowHarness::settle`] gives up.
///
/// Measurement only targets placeholder items, so a well-behaved layout
/// settles after two passes; hitting the limit means the loop diverges.
const MAX_SETTLE_PASSES: usize = 16;

/// Drives a [`FlowLayoutHandle`] like a host framework would: render the
/// current rows, measure what was rendered, repeat until stable.
pub struct FlowHarness<T> {
    layout: FlowLayoutHandle<T>,
    measurer: SizeTableMeasurer<T>,
    renderer: RecordingRenderer<T>,
    invalidations: Rc<RefCell<Vec<Invalidation>>>,
    _subscription: ObserverHandle,
}

impl<T: Clone + PartialEq + 'static> FlowHarness<T> {
    pub fn new(layout: FlowLayout<T>, measurer: SizeTableMeasurer<T>) -> Self {
        let layout = FlowLayoutHandle::new(layout);
        let invalidations = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&invalidations);
        let subscription = layout.subscribe(move |event| sink.borrow_mut().push(*event));
        Self {
            layout,
            measurer,
            renderer: RecordingRenderer::new(),
            invalidations,
            _subscription: subscription,
        }
    }

    pub fn layout(&self) -> &FlowLayoutHandle<T> {
        &self.layout
    }

    pub fn measurer(&self) -> &SizeTableMeasurer<T> {
        &self.measurer
    }

    pub fn renderer(&self) -> &RecordingRenderer<T> {
        &self.renderer
    }

    /// Simulates the host resizing the container.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        self.layout.on_container_width_changed(width)
    }

    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        self.layout.set_items(items)
    }

    /// One render pass followed by measuring the freshly rendered items.
    ///
    /// Returns the number of items whose size changed.
    pub fn pump(&mut self) -> usize {
        self.layout.render(&mut self.renderer);
        self.layout.measure_unmeasured(&mut self.measurer)
    }

    /// Pumps until a pass measures nothing new. Returns the number of passes.
    pub fn settle(&mut self) -> usize {
        for pass in 1..=MAX_SETTLE_PASSES {
            if self.pump() == 0 {
                return pass;
            }
        }
        log::warn!("flow harness: layout did not settle after {MAX_SETTLE_PASSES} passes");
        MAX_SETTLE_PASSES
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame<T>> {
        self.renderer.last_frame()
    }

    /// Rows of the last rendered frame.
    pub fn rendered_rows(&self) -> Vec<Vec<usize>> {
        self.renderer
            .last_frame()
            .map(RecordedFrame::index_rows)
            .unwrap_or_default()
    }

    /// Rows the layout would render now.
    pub fn current_rows(&self) -> Vec<Vec<usize>> {
        self.layout.index_rows()
    }

    pub fn placement(&self) -> FlowPlacement {
        self.layout.placement()
    }

    pub fn invalidations(&self) -> Vec<Invalidation> {
        self.invalidations.borrow().clone()
    }
}
