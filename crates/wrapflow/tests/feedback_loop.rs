use wrapflow::{EdgeInsets, FlowLayout, FlowOptions, Invalidation, Rect, Size, DEFAULT_ITEM_SIZE};
use wrapflow_testing::{
    assert_no_overlap, assert_rect_approx_eq, assert_rows_fit, assert_rows_preserve_order,
    FlowHarness, SizeTableMeasurer,
};

fn words() -> Vec<String> {
    [
        "Rust", "Cargo", "Borrow Checker", "Traits", "Lifetimes", "Macros", "Iterators",
        "Async", "Serde", "Tokio",
    ]
    .iter()
    .map(|word| word.to_string())
    .collect()
}

fn chip_harness(width: f32) -> FlowHarness<String> {
    let layout = FlowLayout::new(words(), FlowOptions::default());
    let mut harness = FlowHarness::new(layout, SizeTableMeasurer::text_chips(8.0, 16.0, 6.0));
    harness.set_container_width(width);
    harness
}

#[test]
fn first_frame_uses_placeholders_then_settles_on_measured_sizes() {
    let mut harness = chip_harness(240.0);

    assert_eq!(harness.pump(), 10);
    let first = harness.renderer().frames()[0].clone();
    // placeholders are 100 wide: two per row at 240
    assert_eq!(first.rows.len(), 5);
    assert_eq!(first.placement.frames[0].rect.size(), DEFAULT_ITEM_SIZE);

    assert_eq!(harness.settle(), 1);
    let rows = harness.rendered_rows();
    assert!(rows.len() < first.rows.len());
    assert_rows_preserve_order(&rows, 10);
    assert_eq!(harness.measurer().call_count(), 10);
}

#[test]
fn settled_layout_fits_the_container() {
    let mut harness = chip_harness(240.0);
    assert_eq!(harness.settle(), 2);

    let placement = harness.placement();
    assert_rows_fit(&placement, 240.0);
    assert_no_overlap(&placement);
    // "Rust" is 4 * 8 + 12 wide and 28 tall
    assert_rect_approx_eq(
        placement.frames[0].rect,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 44.0,
            height: 28.0,
        },
        0.001,
        "first chip",
    );
}

#[test]
fn measurer_is_asked_with_unbounded_constraints() {
    let mut harness = chip_harness(120.0);
    harness.settle();
    assert!(harness
        .measurer()
        .calls()
        .iter()
        .all(|(_, constraints)| !constraints.has_bounded_width()));
}

#[test]
fn shrinking_the_container_never_reduces_rows() {
    let mut harness = chip_harness(300.0);
    harness.settle();
    let wide = harness.current_rows().len();

    harness.set_container_width(120.0);
    harness.settle();
    let narrow = harness.rendered_rows().len();

    assert!(narrow >= wide);
    // resizing needs no new measurements
    assert_eq!(harness.measurer().call_count(), 10);
}

#[test]
fn invalidations_arrive_in_write_order() {
    let mut harness = chip_harness(200.0);
    harness.settle();
    harness.set_container_width(180.0);

    assert_eq!(
        harness.invalidations(),
        vec![
            Invalidation::ContainerWidth {
                available_width: 200.0
            },
            Invalidation::ItemsMeasured(10),
            Invalidation::ContainerWidth {
                available_width: 180.0
            },
        ]
    );
}

#[test]
fn oversized_item_sits_alone_between_normal_rows() {
    let sizes = vec![
        Size::new(50.0, 20.0),
        Size::new(50.0, 20.0),
        Size::new(500.0, 20.0),
        Size::new(50.0, 20.0),
    ];
    let layout = FlowLayout::with_spacing(vec!['a', 'b', 'X', 'c'], 10.0);
    let mut harness = FlowHarness::new(layout, SizeTableMeasurer::from_sizes(sizes));
    harness.set_container_width(120.0);
    harness.settle();

    assert_eq!(harness.rendered_rows(), vec![vec![0, 1], vec![2], vec![3]]);
    let frame = harness.last_frame().unwrap();
    assert_eq!(frame.rows[1], vec![(2, 'X')]);
    assert_eq!(frame.placement.content_size.width, 500.0);
}

#[test]
fn replacing_items_only_remeasures_changed_ones() {
    let mut harness = chip_harness(240.0);
    harness.settle();

    let mut next = words();
    next[3] = "Generics".to_string();
    next.push("Clippy".to_string());
    assert!(harness.set_items(next));
    harness.settle();

    let calls = harness.measurer().measured_indices();
    assert_eq!(&calls[10..], &[3, 10]);
    assert_rows_preserve_order(&harness.rendered_rows(), 11);
}

#[test]
fn empty_items_render_one_empty_row() {
    let layout: FlowLayout<String> = FlowLayout::new(Vec::new(), FlowOptions::default());
    let mut harness = FlowHarness::new(layout, SizeTableMeasurer::text_chips(8.0, 16.0, 6.0));
    harness.set_container_width(320.0);

    assert_eq!(harness.settle(), 1);
    assert_eq!(harness.rendered_rows(), vec![Vec::<usize>::new()]);
    assert_eq!(harness.placement().content_size, Size::ZERO);
}

#[test]
fn padded_container_offsets_every_frame() {
    let options = FlowOptions::new().content_padding(EdgeInsets::uniform(10.0));
    let layout = FlowLayout::new(words(), options);
    let mut harness = FlowHarness::new(layout, SizeTableMeasurer::text_chips(8.0, 16.0, 6.0));
    harness.set_container_width(260.0);
    harness.settle();

    let placement = harness.placement();
    assert_rows_fit(&placement, 240.0);
    assert!(placement
        .frames
        .iter()
        .all(|frame| frame.rect.x >= 10.0 && frame.rect.right() <= 250.0));
    assert_eq!(placement.frames[0].rect.y, 10.0);
}
