//! Alignment of items inside their row

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Align items to the top edge of the row.
    Top,
    /// Align items to the vertical center of the row.
    #[default]
    CenterVertically,
    /// Align items to the bottom edge of the row.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => ((available - child) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (available - child).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VerticalAlignment;

    #[test]
    fn center_never_goes_negative() {
        assert_eq!(VerticalAlignment::CenterVertically.align(30.0, 10.0), 10.0);
        assert_eq!(VerticalAlignment::CenterVertically.align(10.0, 30.0), 0.0);
        assert_eq!(VerticalAlignment::Bottom.align(30.0, 10.0), 20.0);
        assert_eq!(VerticalAlignment::Top.align(30.0, 10.0), 0.0);
    }
}
