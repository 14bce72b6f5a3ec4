//! Shared handle for hosts whose callbacks must capture the layout.

use wrapflow_core::{ObserverHandle, ObserverRegistry, Owned};
use wrapflow_graphics::Size;
use wrapflow_layout::FlowPlacement;

use crate::flow_layout::{FlowLayout, Invalidation};
use crate::host::{ItemMeasurer, RowRenderer};

/// Cheaply clonable, single-threaded handle to a [`FlowLayout`].
///
/// Writes release the layout borrow before observers run, so an observer
/// may read the layout through its own clone of the handle (the usual
/// "invalidate, then re-render" loop).
pub struct FlowLayoutHandle<T> {
    layout: Owned<FlowLayout<T>>,
    observers: ObserverRegistry<Invalidation>,
}

impl<T> Clone for FlowLayoutHandle<T> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout.clone(),
            observers: self.observers.clone(),
        }
    }
}

impl<T: 'static> FlowLayoutHandle<T> {
    pub fn new(layout: FlowLayout<T>) -> Self {
        let observers = layout.observers();
        Self {
            layout: Owned::new(layout),
            observers,
        }
    }

    /// Run `f` with the layout.
    pub fn with<R>(&self, f: impl FnOnce(&FlowLayout<T>) -> R) -> R {
        self.layout.with(f)
    }

    pub fn subscribe(&self, observer: impl Fn(&Invalidation) + 'static) -> ObserverHandle {
        self.observers.register(observer)
    }

    pub fn on_container_width_changed(&self, width: f32) -> bool {
        let invalidation = self
            .layout
            .update(|layout| layout.apply_container_width(width));
        self.notify(invalidation)
    }

    pub fn on_item_measured(&self, index: usize, size: Size) -> bool {
        let invalidation = self
            .layout
            .update(|layout| layout.apply_measurement(index, size));
        self.notify(invalidation)
    }

    pub fn on_items_measured(&self, measurements: impl IntoIterator<Item = (usize, Size)>) -> bool {
        let invalidation = self
            .layout
            .update(|layout| layout.apply_measurements(measurements));
        self.notify(invalidation)
    }

    /// See [`FlowLayout::measure_unmeasured`]. The measurer runs while the
    /// layout is borrowed and must not call back into this handle.
    pub fn measure_unmeasured<M>(&self, measurer: &mut M) -> usize
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        self.measure_with(measurer, |layout| layout.size_cache().unmeasured().collect())
    }

    /// See [`FlowLayout::remeasure_all`]. Same reentrancy rule as
    /// [`FlowLayoutHandle::measure_unmeasured`].
    pub fn remeasure_all<M>(&self, measurer: &mut M) -> usize
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        self.measure_with(measurer, |layout| (0..layout.items().len()).collect())
    }

    /// Returns a callback reporting the size of item `index`.
    ///
    /// The callback holds the layout weakly: once every handle is dropped it
    /// does nothing.
    pub fn measurement_callback(&self, index: usize) -> impl FnMut(Size) + 'static {
        let layout = self.layout.downgrade();
        let observers = self.observers.clone();
        move |size| {
            let Some(layout) = layout.upgrade() else {
                log::trace!("flow layout: measurement for item {index} after teardown");
                return;
            };
            let invalidation = layout.update(|layout| layout.apply_measurement(index, size));
            if let Some(invalidation) = invalidation {
                observers.notify(&invalidation);
            }
        }
    }

    pub fn placement(&self) -> FlowPlacement {
        self.layout.with(|layout| layout.placement())
    }

    /// See [`FlowLayout::render`]. The renderer must not call back into
    /// this handle synchronously.
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: RowRenderer<T> + ?Sized,
    {
        self.layout.with(|layout| layout.render(renderer));
    }

    /// Row contents as index lists.
    pub fn index_rows(&self) -> Vec<Vec<usize>> {
        self.layout.with(|layout| layout.rows().index_rows())
    }

    pub fn generation(&self) -> u64 {
        self.layout.with(|layout| layout.generation())
    }

    fn measure_with<M>(
        &self,
        measurer: &mut M,
        indices: impl FnOnce(&FlowLayout<T>) -> Vec<usize>,
    ) -> usize
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        let invalidation = self.layout.update(|layout| {
            let pending = indices(layout);
            layout.measure_indices(pending, measurer)
        });
        let changed = match invalidation {
            Some(Invalidation::ItemsMeasured(changed)) => changed,
            _ => 0,
        };
        self.notify(invalidation);
        changed
    }

    fn notify(&self, invalidation: Option<Invalidation>) -> bool {
        match invalidation {
            Some(invalidation) => {
                self.observers.notify(&invalidation);
                true
            }
            None => false,
        }
    }
}

impl<T: PartialEq + 'static> FlowLayoutHandle<T> {
    pub fn set_items(&self, items: Vec<T>) -> bool {
        let invalidation = self.layout.update(|layout| layout.apply_items(items));
        self.notify(invalidation)
    }
}

#[cfg(test)]
#[path = "tests/handle_tests.rs"]
mod tests;
