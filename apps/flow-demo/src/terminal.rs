//! Text-mode host: chips are measured in character cells and drawn into a
//! character grid.

use wrapflow::{Constraints, FlowPlacement, FlowRow, ItemMeasurer, RowRenderer, Size};

/// Columns taken by the chip border on each side: `[ ` and ` ]`.
const CHIP_BORDER: usize = 2;

pub fn chip_label(text: &str) -> String {
    format!("[ {text} ]")
}

/// Measures a chip as its label width by one line.
#[derive(Default)]
pub struct ChipMeasurer {
    pub measured: usize,
}

impl ItemMeasurer<String> for ChipMeasurer {
    fn measure(&mut self, index: usize, item: &String, constraints: Constraints) -> Size {
        self.measured += 1;
        let width = item.chars().count() + CHIP_BORDER * 2;
        log::trace!("measured chip {index} {item:?} as {width} columns");
        constraints.constrain(Size::new(width as f32, 1.0))
    }
}

/// Draws each render pass into lines of text.
#[derive(Default)]
pub struct TerminalRenderer {
    grid: Vec<Vec<char>>,
    placement: FlowPlacement,
    rows: usize,
}

impl TerminalRenderer {
    pub fn lines(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    fn put(&mut self, x: usize, y: usize, text: &str) {
        if self.grid.len() <= y {
            self.grid.resize(y + 1, Vec::new());
        }
        let line = &mut self.grid[y];
        for (offset, ch) in text.chars().enumerate() {
            let column = x + offset;
            if line.len() <= column {
                line.resize(column + 1, ' ');
            }
            line[column] = ch;
        }
    }
}

impl RowRenderer<String> for TerminalRenderer {
    fn begin(&mut self, _spacing: f32, placement: &FlowPlacement) {
        self.grid.clear();
        self.rows = 0;
        self.placement = placement.clone();
    }

    fn row(&mut self, row: FlowRow<'_, String>) {
        self.rows += 1;
        for (index, item) in row.iter() {
            let Some(frame) = self.placement.frame(index).copied() else {
                log::warn!("no frame for chip {index}");
                continue;
            };
            self.put(
                frame.rect.x.round() as usize,
                frame.rect.y.round() as usize,
                &chip_label(item),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapflow::{FlowLayout, FlowOptions};

    fn render(words: &[&str], width: f32) -> Vec<String> {
        let items = words.iter().map(|word| word.to_string()).collect();
        let mut layout = FlowLayout::new(items, FlowOptions::new().spacing(1.0));
        layout.on_container_width_changed(width);
        layout.measure_unmeasured(&mut ChipMeasurer::default());

        let mut renderer = TerminalRenderer::default();
        layout.render(&mut renderer);
        renderer.lines()
    }

    #[test]
    fn chips_wrap_into_lines_separated_by_spacing() {
        let lines = render(&["ab", "cd", "ef"], 13.0);
        assert_eq!(lines, vec!["[ ab ] [ cd ]", "", "[ ef ]"]);
    }

    #[test]
    fn wide_container_keeps_one_line() {
        let lines = render(&["ab", "cd", "ef"], 80.0);
        assert_eq!(lines, vec!["[ ab ] [ cd ] [ ef ]"]);
    }
}
