//! The flow layout driver.

use std::cell::RefCell;
use std::ops::Range;

use wrapflow_core::{ObserverHandle, ObserverRegistry};
use wrapflow_graphics::Size;
use wrapflow_layout::{
    pack_row_ranges, place_rows, sanitize_extent, Constraints, FlowPlacement, FlowRows,
    SizeCache, SizeUpdate,
};

use crate::host::{ItemMeasurer, RowRenderer};
use crate::options::FlowOptions;

/// Why the packed rows were invalidated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Invalidation {
    /// The host reported a new container width.
    ContainerWidth { available_width: f32 },
    /// One item reported a new size.
    ItemMeasured(usize),
    /// A batch of measurements changed the sizes of this many distinct items.
    ItemsMeasured(usize),
    /// The item collection was replaced.
    Items,
}

/// Owns the items, their measured sizes and the available width, and
/// derives the packed rows from them.
///
/// Rows are recomputed lazily: a write only drops the cached packing, the
/// next read re-packs. Every effective write bumps [`FlowLayout::generation`]
/// and notifies observers registered with [`FlowLayout::subscribe`].
pub struct FlowLayout<T> {
    items: Vec<T>,
    options: FlowOptions,
    sizes: SizeCache,
    container_width: f32,
    available_width: f32,
    rows: RefCell<Option<Vec<Range<usize>>>>,
    generation: u64,
    observers: ObserverRegistry<Invalidation>,
}

impl<T> FlowLayout<T> {
    pub fn new(items: Vec<T>, options: FlowOptions) -> Self {
        let options = options.sanitized();
        let sizes = SizeCache::new(items.len(), options.placeholder);
        let container_width = options.initial_container_width;
        Self {
            available_width: options.available_width(container_width),
            container_width,
            sizes,
            items,
            options,
            rows: RefCell::new(None),
            generation: 0,
            observers: ObserverRegistry::new(),
        }
    }

    /// Creates a layout with default options and the given spacing.
    pub fn with_spacing(items: Vec<T>, spacing: f32) -> Self {
        Self::new(items, FlowOptions::default().spacing(spacing))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    pub fn spacing(&self) -> f32 {
        self.options.spacing
    }

    /// Last width reported by the host, padding included.
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Width available to items: the container width minus horizontal padding.
    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    pub fn size_cache(&self) -> &SizeCache {
        &self.sizes
    }

    /// Size used for `index` by the next packing.
    pub fn size_of(&self, index: usize) -> Size {
        self.sizes.get(index)
    }

    /// True once every item has reported a size.
    pub fn is_fully_measured(&self) -> bool {
        self.sizes.measured_count() == self.items.len()
    }

    /// Counter bumped by every write that changed the layout inputs.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Registers `observer` for invalidations.
    ///
    /// Returns a handle that will automatically unregister the observer when dropped.
    pub fn subscribe(&self, observer: impl Fn(&Invalidation) + 'static) -> ObserverHandle {
        self.observers.register(observer)
    }

    /// Reports a new container width.
    ///
    /// Returns true if the width available to items changed.
    pub fn on_container_width_changed(&mut self, width: f32) -> bool {
        let invalidation = self.apply_container_width(width);
        self.notify(invalidation)
    }

    /// Records the measured size of one item.
    ///
    /// A measurement for an index outside the current items is a stale
    /// callback and is ignored. Returns true if the size changed.
    pub fn on_item_measured(&mut self, index: usize, size: Size) -> bool {
        let invalidation = self.apply_measurement(index, size);
        self.notify(invalidation)
    }

    /// Records a batch of measurements. Later entries for the same index
    /// win. Observers are notified at most once.
    pub fn on_items_measured(&mut self, measurements: impl IntoIterator<Item = (usize, Size)>) -> bool {
        let invalidation = self.apply_measurements(measurements);
        self.notify(invalidation)
    }

    /// Measures every item still using the placeholder size.
    ///
    /// Returns the number of items whose size changed.
    pub fn measure_unmeasured<M>(&mut self, measurer: &mut M) -> usize
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        let pending: Vec<usize> = self.sizes.unmeasured().collect();
        let invalidation = self.measure_indices(pending, measurer);
        self.notify_count(invalidation)
    }

    /// Measures every item again, e.g. after the host changed fonts.
    pub fn remeasure_all<M>(&mut self, measurer: &mut M) -> usize
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        let all: Vec<usize> = (0..self.items.len()).collect();
        let invalidation = self.measure_indices(all, measurer);
        self.notify_count(invalidation)
    }

    /// The rows for the latest width and sizes.
    pub fn rows(&self) -> FlowRows<'_, T> {
        FlowRows::new(&self.items, self.row_ranges())
    }

    /// Resolved frames for the latest rows.
    pub fn placement(&self) -> FlowPlacement {
        let ranges = self.row_ranges();
        place_rows(
            &ranges,
            |index| self.sizes.get(index),
            self.options.placement_params(),
        )
    }

    /// Hands the latest rows to `renderer`.
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: RowRenderer<T> + ?Sized,
    {
        let rows = self.rows();
        let placement = place_rows(
            rows.ranges(),
            |index| self.sizes.get(index),
            self.options.placement_params(),
        );
        renderer.begin(self.options.spacing, &placement);
        for row in rows.rows() {
            renderer.row(row);
        }
        renderer.end();
    }

    pub(crate) fn observers(&self) -> ObserverRegistry<Invalidation> {
        self.observers.clone()
    }

    pub(crate) fn apply_container_width(&mut self, width: f32) -> Option<Invalidation> {
        let width = sanitize_extent(width, "container width");
        self.container_width = width;
        let available_width = self.options.available_width(width);
        if available_width == self.available_width {
            return None;
        }
        log::debug!(
            "flow layout: available width {} -> {}",
            self.available_width,
            available_width
        );
        self.available_width = available_width;
        Some(self.invalidate(Invalidation::ContainerWidth { available_width }))
    }

    pub(crate) fn apply_measurement(&mut self, index: usize, size: Size) -> Option<Invalidation> {
        self.record_size(index, size)
            .then(|| self.invalidate(Invalidation::ItemMeasured(index)))
    }

    pub(crate) fn apply_measurements(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, Size)>,
    ) -> Option<Invalidation> {
        let mut changed: Vec<usize> = measurements
            .into_iter()
            .filter(|&(index, size)| self.record_size(index, size))
            .map(|(index, _)| index)
            .collect();
        changed.sort_unstable();
        changed.dedup();
        if changed.is_empty() {
            return None;
        }
        Some(self.invalidate(Invalidation::ItemsMeasured(changed.len())))
    }

    pub(crate) fn measure_indices<M>(
        &mut self,
        indices: Vec<usize>,
        measurer: &mut M,
    ) -> Option<Invalidation>
    where
        M: ItemMeasurer<T> + ?Sized,
    {
        let constraints = Constraints::unbounded();
        let measurements: Vec<(usize, Size)> = indices
            .into_iter()
            .map(|index| (index, measurer.measure(index, &self.items[index], constraints)))
            .collect();
        self.apply_measurements(measurements)
    }

    fn record_size(&mut self, index: usize, size: Size) -> bool {
        match self.sizes.set(index, size) {
            SizeUpdate::Changed => {
                log::trace!("flow layout: item {index} measured as {size:?}");
                true
            }
            SizeUpdate::Unchanged => false,
            SizeUpdate::OutOfRange => {
                log::warn!(
                    "flow layout: ignoring measurement for item {index}, only {} items",
                    self.items.len()
                );
                false
            }
        }
    }

    fn row_ranges(&self) -> Vec<Range<usize>> {
        let mut cached = self.rows.borrow_mut();
        cached
            .get_or_insert_with(|| {
                log::debug!(
                    "flow layout: packing {} items into width {}",
                    self.items.len(),
                    self.available_width
                );
                pack_row_ranges(
                    self.items.len(),
                    |index| self.sizes.get(index),
                    self.available_width,
                    self.options.spacing,
                )
            })
            .clone()
    }

    fn invalidate(&mut self, reason: Invalidation) -> Invalidation {
        self.rows.get_mut().take();
        self.generation += 1;
        log::trace!(
            "flow layout: invalidated ({reason:?}), generation {}",
            self.generation
        );
        reason
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

    fn notify_count(&self, invalidation: Option<Invalidation>) -> usize {
        let changed = match invalidation {
            Some(Invalidation::ItemsMeasured(changed)) => changed,
            _ => 0,
        };
        self.notify(invalidation);
        changed
    }
}

impl<T: PartialEq> FlowLayout<T> {
    /// Replaces the items.
    ///
    /// Measurements are kept for indices whose item is unchanged; every
    /// other index falls back to the placeholder until it is measured again.
    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        let invalidation = self.apply_items(items);
        self.notify(invalidation)
    }

    pub(crate) fn apply_items(&mut self, items: Vec<T>) -> Option<Invalidation> {
        if items == self.items {
            return None;
        }
        let mut dropped = 0;
        for (index, (old, new)) in self.items.iter().zip(items.iter()).enumerate() {
            if old != new && self.sizes.invalidate(index) {
                dropped += 1;
            }
        }
        log::debug!(
            "flow layout: items {} -> {}, {dropped} measurements dropped",
            self.items.len(),
            items.len()
        );
        self.sizes.resize(items.len());
        self.items = items;
        Some(self.invalidate(Invalidation::Items))
    }
}

#[cfg(test)]
#[path = "tests/flow_layout_tests.rs"]
mod tests;
