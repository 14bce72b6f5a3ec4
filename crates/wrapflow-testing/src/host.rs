//! Headless stand-ins for the host framework's measure and render passes.

use wrapflow::{Constraints, FlowPlacement, FlowRow, ItemMeasurer, RowRenderer, Size};

/// Measures items by looking their size up in a table.
///
/// Every call is logged so tests can assert which items were measured and
/// with which constraints.
pub struct SizeTableMeasurer<T> {
    size_of: Box<dyn Fn(usize, &T) -> Size>,
    calls: Vec<(usize, Constraints)>,
}

impl<T: 'static> SizeTableMeasurer<T> {
    /// Sizes come from `sizes[index]`; indices past the end measure as zero.
    pub fn from_sizes(sizes: Vec<Size>) -> Self {
        Self::from_fn(move |index, _| sizes.get(index).copied().unwrap_or(Size::ZERO))
    }

    /// Sizes come from the item itself.
    pub fn from_fn(size_of: impl Fn(usize, &T) -> Size + 'static) -> Self {
        Self {
            size_of: Box::new(size_of),
            calls: Vec::new(),
        }
    }

    /// Indices measured so far, in call order.
    pub fn measured_indices(&self) -> Vec<usize> {
        self.calls.iter().map(|(index, _)| *index).collect()
    }

    pub fn calls(&self) -> &[(usize, Constraints)] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl SizeTableMeasurer<String> {
    /// Measures strings as monospaced text chips: `glyph_width` per char plus
    /// horizontal padding, one line tall.
    pub fn text_chips(glyph_width: f32, line_height: f32, padding: f32) -> Self {
        Self::from_fn(move |_, text: &String| {
            Size::new(
                text.chars().count() as f32 * glyph_width + padding * 2.0,
                line_height + padding * 2.0,
            )
        })
    }
}

impl<T> ItemMeasurer<T> for SizeTableMeasurer<T> {
    fn measure(&mut self, index: usize, item: &T, constraints: Constraints) -> Size {
        self.calls.push((index, constraints));
        constraints.constrain((self.size_of)(index, item))
    }
}

/// One render pass as seen by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame<T> {
    pub spacing: f32,
    pub rows: Vec<Vec<(usize, T)>>,
    pub placement: FlowPlacement,
}

impl<T> RecordedFrame<T> {
    pub fn index_rows(&self) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|(index, _)| *index).collect())
            .collect()
    }
}

/// Records every render pass.
pub struct RecordingRenderer<T> {
    frames: Vec<RecordedFrame<T>>,
    current: Option<RecordedFrame<T>>,
}

impl<T> Default for RecordingRenderer<T> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            current: None,
        }
    }
}

impl<T> RecordingRenderer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RecordedFrame<T>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame<T>> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl<T: Clone> RowRenderer<T> for RecordingRenderer<T> {
    fn begin(&mut self, spacing: f32, placement: &FlowPlacement) {
        debug_assert!(self.current.is_none(), "render pass already in progress");
        self.current = Some(RecordedFrame {
            spacing,
            rows: Vec::new(),
            placement: placement.clone(),
        });
    }

    fn row(&mut self, row: FlowRow<'_, T>) {
        let entries = row.iter().map(|(index, item)| (index, item.clone())).collect();
        match self.current.as_mut() {
            Some(frame) => frame.rows.push(entries),
            None => log::warn!("row {} rendered outside of a render pass", row.row_index()),
        }
    }

    fn end(&mut self) {
        if let Some(frame) = self.current.take() {
            self.frames.push(frame);
        }
    }
}
