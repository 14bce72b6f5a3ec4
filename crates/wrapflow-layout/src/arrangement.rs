//! Arrangement strategies for distributing children along an axis

/// Trait implemented by arrangement strategies that distribute children on an axis.
pub trait Arrangement {
    /// Computes the leading position of each child from their sizes.
    fn arrange(&self, sizes: &[f32], out_positions: &mut [f32]);
}

/// Leading-edge arrangement with a fixed gap between neighbours, used both
/// for items inside a flow row and for stacking rows.
///
/// Flow layouts are always start-aligned: leftover space stays at the
/// trailing edge of a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearArrangement {
    spacing: f32,
}

impl LinearArrangement {
    /// Creates an arrangement that inserts a fixed spacing between children.
    pub fn spaced_by(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Gap inserted between two neighbours.
    pub fn gap(&self) -> f32 {
        self.spacing
    }

    /// Total extent occupied by `sizes` under this arrangement.
    pub fn extent(&self, sizes: &[f32]) -> f32 {
        if sizes.is_empty() {
            return 0.0;
        }
        let children: f32 = sizes.iter().copied().sum();
        children + self.spacing * (sizes.len() - 1) as f32
    }

    fn fill_positions(start: f32, gap: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let mut cursor = start;
        for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
            *position = cursor;
            cursor += size;
            if index + 1 < sizes.len() {
                cursor += gap;
            }
        }
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, sizes: &[f32], out_positions: &mut [f32]) {
        if sizes.is_empty() {
            return;
        }
        Self::fill_positions(0.0, self.spacing, sizes, out_positions);
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
