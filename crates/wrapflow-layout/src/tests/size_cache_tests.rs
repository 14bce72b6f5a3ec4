use super::*;

#[test]
fn unmeasured_indices_report_the_placeholder() {
    let cache = SizeCache::with_default_placeholder(3);
    assert_eq!(cache.get(0), DEFAULT_ITEM_SIZE);
    assert_eq!(cache.get(2), Size::new(100.0, 100.0));
    assert_eq!(cache.measured_count(), 0);
    assert_eq!(cache.unmeasured().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn measured_size_is_kept_until_remeasured() {
    let mut cache = SizeCache::with_default_placeholder(2);
    assert_eq!(cache.set(1, Size::new(42.0, 18.0)), SizeUpdate::Changed);
    assert_eq!(cache.get(1), Size::new(42.0, 18.0));
    assert_eq!(cache.get(0), DEFAULT_ITEM_SIZE);

    assert_eq!(cache.set(1, Size::new(42.0, 18.0)), SizeUpdate::Unchanged);
    assert_eq!(cache.set(1, Size::new(50.0, 18.0)), SizeUpdate::Changed);
    assert_eq!(cache.get(1), Size::new(50.0, 18.0));
    assert_eq!(cache.unmeasured().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn out_of_range_measurements_are_ignored() {
    let mut cache = SizeCache::with_default_placeholder(2);
    assert_eq!(cache.set(2, Size::new(10.0, 10.0)), SizeUpdate::OutOfRange);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.measured_count(), 0);
    assert_eq!(cache.get(2), DEFAULT_ITEM_SIZE);
}

#[test]
fn invalid_measurements_are_clamped() {
    let mut cache = SizeCache::with_default_placeholder(1);
    assert!(cache.set(0, Size::new(-3.0, f32::NAN)).is_changed());
    assert_eq!(cache.get(0), Size::ZERO);

    cache.set(0, Size::new(f32::INFINITY, 12.0));
    assert_eq!(cache.get(0), Size::new(0.0, 12.0));
}

#[test]
fn invalid_placeholder_falls_back_to_default() {
    let cache = SizeCache::new(1, Size::new(-1.0, 30.0));
    assert_eq!(cache.placeholder(), DEFAULT_ITEM_SIZE);

    let cache = SizeCache::new(1, Size::new(100.0, 30.0));
    assert_eq!(cache.get(0), Size::new(100.0, 30.0));
}

#[test]
fn resize_drops_stale_indices() {
    let mut cache = SizeCache::with_default_placeholder(3);
    cache.set(0, Size::new(10.0, 10.0));
    cache.set(2, Size::new(30.0, 10.0));

    cache.resize(2);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.measured_count(), 1);

    cache.resize(3);
    assert!(!cache.is_measured(2));
    assert_eq!(cache.get(2), DEFAULT_ITEM_SIZE);
    assert_eq!(cache.get(0), Size::new(10.0, 10.0));
}

#[test]
fn invalidate_forgets_one_measurement() {
    let mut cache = SizeCache::with_default_placeholder(2);
    cache.set(0, Size::new(10.0, 10.0));
    cache.set(1, Size::new(20.0, 10.0));

    assert!(cache.invalidate(0));
    assert!(!cache.invalidate(0));
    assert!(!cache.invalidate(9));
    assert_eq!(cache.get(0), DEFAULT_ITEM_SIZE);
    assert_eq!(cache.measured_count(), 1);
}
