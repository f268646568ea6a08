use approx::assert_relative_eq;
use ggraph::core::{Axis, AxisRange, AxisSelection, RangeModel};
use proptest::prelude::*;

fn model_with(x: (f64, f64), y: (f64, f64)) -> RangeModel {
    let mut model = RangeModel::default();
    model.install_max_range(
        AxisSelection::Both,
        [
            Some(AxisRange::new(x.0, x.1)),
            Some(AxisRange::new(y.0, y.1)),
        ],
    );
    model
}

#[test]
fn padded_extent_adds_one_percent_per_side() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let range = AxisRange::padded_extent([&x[..]]).expect("finite data");
    assert_relative_eq!(range.low(), -0.04, epsilon = 1e-12);
    assert_relative_eq!(range.high(), 4.04, epsilon = 1e-12);
    assert_relative_eq!(range.width(), 4.08, epsilon = 1e-12);
}

#[test]
fn padded_extent_skips_non_finite_and_handles_single_value() {
    let values = [f64::NAN, 5.0, f64::INFINITY, 5.0];
    let range = AxisRange::padded_extent([&values[..]]).expect("one finite value");
    assert!(range.width() > 0.0);
    assert!(range.contains(5.0));

    let empty = [f64::NAN, f64::NEG_INFINITY];
    assert!(AxisRange::padded_extent([&empty[..]]).is_none());
}

#[test]
fn install_resets_view_and_zoom_flags() {
    let mut model = model_with((0.0, 10.0), (-1.0, 1.0));
    model.set_range(Axis::X, 2.0, 4.0);
    assert!(model.zoomed(Axis::X));

    model.install_max_range(AxisSelection::X, [Some(AxisRange::new(0.0, 20.0)), None]);
    assert!(!model.zoomed(Axis::X));
    assert_eq!(model.range(Axis::X), AxisRange::new(0.0, 20.0));
    assert_eq!(model.max_range(Axis::Y), AxisRange::new(-1.0, 1.0));
}

#[test]
fn missing_scan_keeps_previous_max_range() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.install_max_range(AxisSelection::Both, [None, None]);
    assert_eq!(model.max_range(Axis::X), AxisRange::new(0.0, 10.0));
    assert_eq!(model.range(Axis::X), AxisRange::new(0.0, 10.0));
}

#[test]
fn degenerate_set_range_reverts_to_max_range() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 3.0, 6.0);
    model.set_range(Axis::X, 5.0, 5.0);
    assert_eq!(model.range(Axis::X), model.max_range(Axis::X));
    assert!(!model.zoomed(Axis::X));

    model.set_range(Axis::Y, f64::NAN, 0.5);
    assert_eq!(model.range(Axis::Y), model.max_range(Axis::Y));
}

#[test]
fn narrow_requests_above_the_noise_ratio_are_kept() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 5.0, 5.0 + 1e-9);
    assert!(model.zoomed(Axis::X));
    assert_relative_eq!(model.range(Axis::X).low(), 5.0, epsilon = 1e-12);

    model.set_range(Axis::X, 5.0, 5.0 + 1e-11);
    assert_eq!(model.range(Axis::X), model.max_range(Axis::X));
}

#[test]
fn reversed_bounds_are_reordered() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 7.0, 2.0);
    assert_eq!(model.range(Axis::X), AxisRange::new(2.0, 7.0));
}

#[test]
fn range_jump_preserves_width() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 2.0, 4.0);
    model.range_jump(Axis::X, 1.5);
    assert_relative_eq!(model.range(Axis::X).low(), 3.5);
    assert_relative_eq!(model.range(Axis::X).width(), 2.0, epsilon = 1e-12);
}

#[test]
fn round_off_does_not_count_as_zoom() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 1e-12, 10.0 - 1e-12);
    assert!(!model.zoomed(Axis::X));
}

#[test]
fn ensure_overlap_resets_views_outside_the_data() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    model.set_range(Axis::X, 20.0, 30.0);
    model.ensure_overlap();
    assert_eq!(model.range(Axis::X), model.max_range(Axis::X));
}

#[test]
fn in_range_is_inclusive() {
    let model = model_with((0.0, 10.0), (0.0, 1.0));
    assert!(model.in_range(0.0, 1.0));
    assert!(model.in_range(10.0, 0.0));
    assert!(!model.in_range(10.1, 0.5));
}

#[test]
fn restore_goes_through_the_degenerate_guard() {
    let mut model = model_with((0.0, 10.0), (0.0, 1.0));
    let max = model.max_ranges();
    model.restore([AxisRange::new(4.0, 4.0), AxisRange::new(0.2, 0.4)], max);
    assert_eq!(model.range(Axis::X), max[0]);
    assert!(model.zoomed(Axis::Y));
}

proptest! {
    #[test]
    fn width_matches_bounds_after_every_set_range(
        requests in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..32)
    ) {
        let mut model = model_with((-500.0, 500.0), (0.0, 1.0));
        for (low, high) in requests {
            model.set_range(Axis::X, low, high);
            let range = model.range(Axis::X);
            prop_assert_eq!(range.width(), range.high() - range.low());
            prop_assert!(range.width() > 0.0);
        }
    }

    #[test]
    fn padding_never_excludes_data(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
    ) {
        let range = AxisRange::padded_extent([&values[..]]).expect("finite data");
        for value in values {
            prop_assert!(range.contains(value));
        }
    }
}
