//! Per-index store of measured item sizes.

use wrapflow_graphics::Size;

/// Size assumed for an item that has not been measured yet.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(100.0, 100.0);

/// Outcome of recording a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUpdate {
    /// The stored size changed; the layout must be recomputed.
    Changed,
    /// The same size was already stored.
    Unchanged,
    /// The index is outside of the item range and was ignored.
    OutOfRange,
}

impl SizeUpdate {
    #[inline]
    pub fn is_changed(self) -> bool {
        matches!(self, SizeUpdate::Changed)
    }
}

/// Last measured size for each item index in `[0, len)`.
///
/// Unmeasured indices report the placeholder. A measured index keeps its
/// size until it is measured again; only [`SizeCache::invalidate`] and
/// shrinking the cache forget a measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeCache {
    placeholder: Size,
    slots: Vec<Option<Size>>,
}

impl SizeCache {
    pub fn new(len: usize, placeholder: Size) -> Self {
        Self {
            placeholder: sanitize_placeholder(placeholder),
            slots: vec![None; len],
        }
    }

    /// Creates a cache using [`DEFAULT_ITEM_SIZE`] as the placeholder.
    pub fn with_default_placeholder(len: usize) -> Self {
        Self::new(len, DEFAULT_ITEM_SIZE)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn placeholder(&self) -> Size {
        self.placeholder
    }

    /// Returns the last measured size, or the placeholder.
    pub fn get(&self, index: usize) -> Size {
        self.measured(index).unwrap_or(self.placeholder)
    }

    /// Returns the last measured size, if any.
    pub fn measured(&self, index: usize) -> Option<Size> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured(index).is_some()
    }

    pub fn measured_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Indices still reporting the placeholder, in ascending order.
    pub fn unmeasured(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
    }

    /// Records a measurement for `index`.
    pub fn set(&mut self, index: usize, size: Size) -> SizeUpdate {
        let Some(slot) = self.slots.get_mut(index) else {
            return SizeUpdate::OutOfRange;
        };
        let size = sanitize_measured(index, size);
        if *slot == Some(size) {
            return SizeUpdate::Unchanged;
        }
        *slot = Some(size);
        SizeUpdate::Changed
    }

    /// Forgets the measurement for `index`. Returns true if one was stored.
    pub fn invalidate(&mut self, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .and_then(|slot| slot.take())
            .is_some()
    }

    /// Resizes the index space. New slots are unmeasured; measurements past
    /// the new length are dropped.
    pub fn resize(&mut self, len: usize) {
        self.slots.resize(len, None);
    }
}

fn sanitize_measured(index: usize, size: Size) -> Size {
    if size.is_valid() {
        return size;
    }
    log::warn!("flow layout: item {index} measured with invalid size {size:?}, clamping");
    let clamped = size.clamp_non_negative();
    Size::new(finite_or_zero(clamped.width), finite_or_zero(clamped.height))
}

/// Returns `size`, or [`DEFAULT_ITEM_SIZE`] with a warning when it is not a
/// finite, non-negative size.
pub fn sanitize_placeholder(size: Size) -> Size {
    if size.is_valid() {
        return size;
    }
    log::warn!("flow layout: invalid placeholder size {size:?}, using {DEFAULT_ITEM_SIZE:?}");
    DEFAULT_ITEM_SIZE
}

#[inline]
fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "tests/size_cache_tests.rs"]
mod tests;
