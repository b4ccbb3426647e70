use chart_spec::core::{ChartMode, tooltip_callback, tooltip_callback_for_name};

#[test]
fn pie_tooltip_computes_percentage() {
    let body = tooltip_callback(ChartMode::Pie);
    assert!(body.contains("reduce"));
    assert!(body.contains("'%'"));
}

#[test]
fn line_variants_share_y_extraction() {
    let line = tooltip_callback(ChartMode::Line);
    assert!(line.contains("value.y"));
    assert_eq!(tooltip_callback(ChartMode::ScatterLine), line);
    assert_eq!(tooltip_callback(ChartMode::DenormalisedScatterLine), line);
}

#[test]
fn bubble_tooltip_renders_pair_with_label() {
    let body = tooltip_callback(ChartMode::BubbleScatter);
    assert!(body.contains("value.x"));
    assert!(body.contains(".label"));
}

#[test]
fn bar_tooltip_returns_raw_value() {
    let body = tooltip_callback(ChartMode::Bar);
    assert!(body.contains("return value;"));
    assert!(!body.contains("value.y"));
}

#[test]
fn named_lookup_matches_modes_and_tolerates_unknown_names() {
    for mode in [
        ChartMode::Pie,
        ChartMode::Bar,
        ChartMode::Line,
        ChartMode::ScatterLine,
        ChartMode::BubbleScatter,
    ] {
        assert_eq!(tooltip_callback_for_name(mode.as_str()), tooltip_callback(mode));
    }
    assert_eq!(tooltip_callback_for_name("histogram"), "");
}
