//! Construction options for a flow layout.

use wrapflow_graphics::{EdgeInsets, Size};
use wrapflow_layout::{
    sanitize_extent, sanitize_placeholder, sanitize_spacing, PlacementParams, VerticalAlignment, DEFAULT_ITEM_SIZE,
    DEFAULT_SPACING,
};

/// Configuration for flow layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowOptions {
    /// Gap between neighbouring items and between rows.
    pub spacing: f32,
    /// Size assumed for items that have not been measured yet.
    pub placeholder: Size,
    /// Padding between the container edge and its items.
    pub content_padding: EdgeInsets,
    /// Alignment of items inside a row taller than themselves.
    pub vertical_alignment: VerticalAlignment,
    /// Container width assumed until the host reports one.
    pub initial_container_width: f32,
}

impl FlowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn placeholder(mut self, placeholder: Size) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn content_padding(mut self, padding: EdgeInsets) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn initial_container_width(mut self, width: f32) -> Self {
        self.initial_container_width = width;
        self
    }

    /// Returns a copy with invalid values replaced by usable ones.
    pub(crate) fn sanitized(self) -> Self {
        let padding = self.content_padding;
        Self {
            spacing: sanitize_spacing(self.spacing),
            placeholder: sanitize_placeholder(self.placeholder),
            content_padding: EdgeInsets::from_components(
                sanitize_extent(padding.left, "left padding"),
                sanitize_extent(padding.top, "top padding"),
                sanitize_extent(padding.right, "right padding"),
                sanitize_extent(padding.bottom, "bottom padding"),
            ),
            vertical_alignment: self.vertical_alignment,
            initial_container_width: sanitize_extent(
                self.initial_container_width,
                "initial container width",
            ),
        }
    }

    /// Width left for items inside a container of `container_width`.
    pub(crate) fn available_width(&self, container_width: f32) -> f32 {
        (container_width - self.content_padding.horizontal_sum()).max(0.0)
    }

    pub(crate) fn placement_params(&self) -> PlacementParams {
        PlacementParams {
            spacing: self.spacing,
            vertical_alignment: self.vertical_alignment,
            content_padding: self.content_padding,
        }
    }
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            placeholder: DEFAULT_ITEM_SIZE,
            content_padding: EdgeInsets::ZERO,
            vertical_alignment: VerticalAlignment::CenterVertically,
            initial_container_width: f32::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_host_component() {
        let options = FlowOptions::default();
        assert_eq!(options.spacing, 8.0);
        assert_eq!(options.placeholder, Size::new(100.0, 100.0));
        assert!(options.content_padding.is_zero());
        assert_eq!(options.vertical_alignment, VerticalAlignment::CenterVertically);
    }

    #[test]
    fn sanitized_clamps_invalid_values() {
        let options = FlowOptions::new()
            .spacing(f32::NAN)
            .content_padding(EdgeInsets::from_components(-4.0, 2.0, 3.0, f32::NAN))
            .initial_container_width(-10.0)
            .placeholder(Size::new(f32::NAN, 40.0))
            .sanitized();

        assert_eq!(options.spacing, 0.0);
        assert_eq!(
            options.content_padding,
            EdgeInsets::from_components(0.0, 2.0, 3.0, 0.0)
        );
        assert_eq!(options.initial_container_width, 0.0);
        assert_eq!(options.placeholder, DEFAULT_ITEM_SIZE);
    }

    #[test]
    fn layout_options_report_the_placeholder_in_use() {
        let layout = crate::FlowLayout::new(
            vec!["a"],
            FlowOptions::new().placeholder(Size::new(-1.0, f32::INFINITY)),
        );
        assert_eq!(layout.options().placeholder, layout.size_cache().placeholder());
        assert_eq!(layout.size_of(0), DEFAULT_ITEM_SIZE);
    }

    #[test]
    fn available_width_subtracts_horizontal_padding() {
        let options = FlowOptions::new().content_padding(EdgeInsets::symmetric(16.0, 4.0));
        assert_eq!(options.available_width(200.0), 168.0);
        assert_eq!(options.available_width(20.0), 0.0);
        assert!(options.available_width(f32::INFINITY).is_infinite());
    }
}
