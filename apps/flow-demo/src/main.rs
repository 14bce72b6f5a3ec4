//! Wraps a list of words into chips at the given terminal width.
//!
//! Usage: `flow-demo [WIDTH] [SPACING] [WORD...]`

mod terminal;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use wrapflow::{EdgeInsets, FlowLayout, FlowLayoutHandle, FlowOptions};

use terminal::{ChipMeasurer, TerminalRenderer};

const DEFAULT_WORDS: &[&str] = &[
    "Rust",
    "Cargo",
    "Borrow Checker",
    "Traits",
    "Lifetimes",
    "Pattern Matching",
    "Iterators",
    "Async",
    "Macros",
    "Unsafe",
];

#[derive(Parser)]
#[command(name = "flow-demo")]
#[command(about = "Wraps words into chips at a terminal width")]
struct Args {
    /// Terminal columns available to the layout
    #[arg(default_value_t = 48.0, value_parser = parse_extent)]
    width: f32,

    /// Columns between chips and rows between lines of chips
    #[arg(default_value_t = 1.0, value_parser = parse_extent)]
    spacing: f32,

    /// Words to lay out; a sample list is used when none are given
    words: Vec<String>,
}

impl Args {
    fn words(&self) -> Vec<String> {
        if self.words.is_empty() {
            DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
        } else {
            self.words.clone()
        }
    }
}

fn parse_extent(raw: &str) -> Result<f32, String> {
    let value: f32 = raw.parse().map_err(|err| format!("{raw:?}: {err}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{raw:?} must be finite and non-negative"));
    }
    Ok(value)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let options = FlowOptions::new()
        .spacing(args.spacing)
        .content_padding(EdgeInsets::horizontal(1.0));
    let layout = FlowLayoutHandle::new(FlowLayout::new(args.words(), options));

    let _redraw = layout.subscribe(|invalidation| {
        log::info!("layout invalidated: {invalidation:?}");
    });

    layout.on_container_width_changed(args.width);

    let mut measurer = ChipMeasurer::default();
    let mut renderer = TerminalRenderer::default();

    // First pass renders placeholders, the host then reports real sizes.
    layout.render(&mut renderer);
    let passes = {
        let mut passes = 1;
        while layout.measure_unmeasured(&mut measurer) > 0 {
            layout.render(&mut renderer);
            passes += 1;
        }
        passes
    };
    log::info!(
        "settled after {passes} passes, {} chips measured",
        measurer.measured
    );

    let rule = "-".repeat(args.width as usize);
    let mut out = io::stdout().lock();
    writeln!(out, "{rule}").context("writing layout")?;
    for line in renderer.lines() {
        writeln!(out, "{line}").context("writing layout")?;
    }
    writeln!(out, "{rule}").context("writing layout")?;
    writeln!(out, "{} rows", renderer.row_count()).context("writing layout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_override_defaults() {
        let args = Args::try_parse_from(["flow-demo", "30", "2", "one", "two"]).unwrap();
        assert_eq!(args.width, 30.0);
        assert_eq!(args.spacing, 2.0);
        assert_eq!(args.words(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn missing_words_fall_back_to_the_sample_list() {
        let args = Args::try_parse_from(["flow-demo"]).unwrap();
        assert_eq!(args.width, 48.0);
        assert_eq!(args.words().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn non_finite_width_is_rejected() {
        assert!(Args::try_parse_from(["flow-demo", "inf"]).is_err());
        assert!(Args::try_parse_from(["flow-demo", "wide"]).is_err());
    }
}
