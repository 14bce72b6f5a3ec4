use super::{Arrangement, LinearArrangement};

#[test]
fn spaced_by_uses_fixed_spacing() {
    let arrangement = LinearArrangement::spaced_by(5.0);
    let sizes = vec![10.0, 10.0];
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(&sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 15.0]);
}

#[test]
fn zero_spacing_packs_children_without_gaps() {
    let arrangement = LinearArrangement::spaced_by(0.0);
    let sizes = vec![10.0, 20.0, 5.0];
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(&sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 10.0, 30.0]);
    assert_eq!(arrangement.extent(&sizes), 35.0);
}

#[test]
fn extent_counts_gaps_between_children_only() {
    let arrangement = LinearArrangement::spaced_by(10.0);
    assert_eq!(arrangement.gap(), 10.0);
    assert_eq!(arrangement.extent(&[]), 0.0);
    assert_eq!(arrangement.extent(&[50.0]), 50.0);
    assert_eq!(arrangement.extent(&[50.0, 50.0]), 110.0);
}
