use super::*;

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn rows_are_left_aligned_and_stacked_with_spacing() {
    let sizes = [
        Size::new(50.0, 20.0),
        Size::new(50.0, 30.0),
        Size::new(50.0, 20.0),
    ];
    let placement = place_rows(
        &[0..2, 2..3],
        |index| sizes[index],
        PlacementParams {
            spacing: 10.0,
            vertical_alignment: VerticalAlignment::Top,
            content_padding: EdgeInsets::ZERO,
        },
    );

    assert_eq!(placement.frames.len(), 3);
    assert_eq!(placement.frames[0].rect, rect(0.0, 0.0, 50.0, 20.0));
    assert_eq!(placement.frames[1].rect, rect(60.0, 0.0, 50.0, 30.0));
    // second row starts below the tallest item of the first plus spacing
    assert_eq!(placement.frames[2].rect, rect(0.0, 40.0, 50.0, 20.0));
    assert_eq!(placement.frames[2].row, 1);

    assert_eq!(placement.rows[0].rect, rect(0.0, 0.0, 110.0, 30.0));
    assert_eq!(placement.rows[1].rect, rect(0.0, 40.0, 50.0, 20.0));
    assert_eq!(placement.content_size, Size::new(110.0, 60.0));
}

#[test]
fn items_are_centered_vertically_by_default() {
    let sizes = [Size::new(40.0, 10.0), Size::new(40.0, 30.0)];
    let placement = place_rows(&[0..2], |index| sizes[index], PlacementParams::default());

    assert_eq!(placement.frames[0].rect.y, 10.0);
    assert_eq!(placement.frames[1].rect.y, 0.0);
    assert_eq!(placement.frames[1].rect.x, 48.0);
}

#[test]
fn padding_offsets_frames_and_grows_content() {
    let placement = place_rows(
        &[0..1],
        |_| Size::new(30.0, 10.0),
        PlacementParams {
            content_padding: EdgeInsets::symmetric(10.0, 5.0),
            ..PlacementParams::default()
        },
    );

    assert_eq!(placement.frames[0].rect, rect(10.0, 5.0, 30.0, 10.0));
    assert_eq!(placement.content_size, Size::new(50.0, 20.0));
}

#[test]
fn empty_row_has_no_frames_and_zero_content() {
    let placement = place_rows(&[0..0], |_| Size::ZERO, PlacementParams::default());
    assert!(placement.frames.is_empty());
    assert_eq!(placement.rows.len(), 1);
    assert_eq!(placement.content_size, Size::ZERO);
    assert!(placement.row_frames(0).is_empty());
}

#[test]
fn frames_within_a_row_never_overlap() {
    let sizes: Vec<Size> = (0..12)
        .map(|index| Size::new(10.0 + index as f32 * 7.0, 20.0))
        .collect();
    let ranges = crate::flow::pack_row_ranges(sizes.len(), |index| sizes[index], 160.0, 8.0);
    let placement = place_rows(&ranges, |index| sizes[index], PlacementParams::default());

    for row in 0..placement.rows.len() {
        let frames = placement.row_frames(row);
        for pair in frames.windows(2) {
            assert!(!pair[0].rect.intersects(&pair[1].rect));
            assert_eq!(pair[1].rect.x - pair[0].rect.right(), 8.0);
        }
    }
    assert_eq!(placement.frame(5).map(|frame| frame.index), Some(5));
    assert!(placement.frame(12).is_none());
}
