use approx::assert_relative_eq;
use chart_spec::core::{BubbleRadiusBehavior, scatter_radius};

#[test]
fn small_range_offsets_instead_of_scaling() {
    assert_relative_eq!(scatter_radius(30.0, 0.0, 40.0), 34.0);
    assert_relative_eq!(scatter_radius(12.5, 10.0, 20.0), 6.5);
}

#[test]
fn wide_range_scales_into_visual_band() {
    assert_relative_eq!(scatter_radius(30.0, 0.0, 100.0), 19.0);
    assert_relative_eq!(scatter_radius(0.0, 0.0, 100.0), 4.0);
    assert_relative_eq!(scatter_radius(100.0, 0.0, 100.0), 54.0);
}

#[test]
fn range_of_exactly_fifty_is_scaled() {
    assert_relative_eq!(scatter_radius(25.0, 0.0, 50.0), 29.0);
}

#[test]
fn equal_bounds_never_divide_by_zero() {
    assert_relative_eq!(scatter_radius(7.0, 7.0, 7.0), 4.0);

    let no_threshold = BubbleRadiusBehavior {
        small_range_threshold: 0.0,
        ..BubbleRadiusBehavior::default()
    };
    let radius = no_threshold.radius(7.0, 7.0, 7.0);
    assert!(radius.is_finite());
    assert_relative_eq!(radius, 4.0);
}

#[test]
fn custom_behavior_changes_band() {
    let behavior = BubbleRadiusBehavior {
        default_radius: 2.0,
        min_radius: 2.0,
        radius_span: 20.0,
        small_range_threshold: 10.0,
    };
    assert_relative_eq!(behavior.radius(50.0, 0.0, 100.0), 12.0);
    assert_relative_eq!(behavior.radius(5.0, 0.0, 8.0), 7.0);
}

#[test]
fn invalid_behavior_is_rejected() {
    let negative = BubbleRadiusBehavior {
        radius_span: -1.0,
        ..BubbleRadiusBehavior::default()
    };
    assert!(negative.validate().is_err());

    let nan = BubbleRadiusBehavior {
        min_radius: f64::NAN,
        ..BubbleRadiusBehavior::default()
    };
    assert!(nan.validate().is_err());
    assert!(BubbleRadiusBehavior::default().validate().is_ok());
}
