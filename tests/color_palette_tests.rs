use chart_spec::core::{ColorPalette, ColorSpec};

#[test]
fn palette_index_wraps_around() {
    let palette = ColorPalette::new(["red", "green", "blue"]).expect("palette");
    assert_eq!(palette.color(0), "red");
    assert_eq!(palette.color(2), "blue");
    assert_eq!(palette.color(3), "red");
    assert_eq!(palette.color(7), "green");
}

#[test]
fn default_palette_has_ten_distinct_colors() {
    let palette = ColorPalette::default();
    assert_eq!(palette.len(), 10);
    assert_eq!(palette.color(10), palette.color(0));
    assert_ne!(palette.color(0), palette.color(1));
}

#[test]
fn first_n_assigns_one_color_per_slice() {
    let palette = ColorPalette::new(["a", "b"]).expect("palette");
    assert_eq!(
        palette.first_n(3),
        ColorSpec::Many(vec!["a".to_owned(), "b".to_owned(), "a".to_owned()])
    );
    assert_eq!(palette.first_n(0), ColorSpec::Many(Vec::new()));
}

#[test]
fn repeat_and_single_use_series_index() {
    let palette = ColorPalette::new(["a", "b"]).expect("palette");
    assert_eq!(
        palette.repeat(1, 2),
        ColorSpec::Many(vec!["b".to_owned(), "b".to_owned()])
    );
    assert_eq!(palette.single(2).as_single(), Some("a"));
    assert!(palette.single(0).as_many().is_none());
}

#[test]
fn empty_palette_is_rejected() {
    let empty: [&str; 0] = [];
    assert!(ColorPalette::new(empty).is_err());
}
