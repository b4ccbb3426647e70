use std::collections::HashSet;

use chart_spec::core::{ChartKind, ChartMode, format_number, scatter_radius};
use chart_spec::{InputTable, assemble_chart_spec};
use proptest::prelude::*;

fn numeric_rows(max_columns: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1..=max_columns).prop_flat_map(|columns| {
        proptest::collection::vec(
            proptest::collection::vec(-1_000_000.0f64..1_000_000.0, columns),
            0..24,
        )
    })
}

fn chart_kind() -> impl Strategy<Value = ChartKind> {
    prop_oneof![
        Just(ChartKind::Pie),
        Just(ChartKind::Bar),
        Just(ChartKind::Line),
        Just(ChartKind::Scatter),
    ]
}

proptest! {
    #[test]
    fn assembly_is_deterministic(rows in numeric_rows(4), kind in chart_kind()) {
        let table = InputTable::new(kind).with_float_rows(rows).with_observed_bounds();

        let first = assemble_chart_spec(&table).expect("first assembly");
        let second = assemble_chart_spec(&table).expect("second assembly");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.to_json_contract_v1_pretty().expect("json"),
            second.to_json_contract_v1_pretty().expect("json")
        );
        prop_assert!(first.validate().is_ok());
    }

    #[test]
    fn labelled_series_align_with_rows_and_columns(
        rows in numeric_rows(5),
        use_bar in any::<bool>()
    ) {
        let row_count = rows.len();
        prop_assume!(row_count > 0);
        let columns = rows[0].len();
        let kind = if use_bar { ChartKind::Bar } else { ChartKind::Line };
        let text = (0..row_count).map(|i| vec![format!("row {i}")]).collect();
        let table = InputTable::new(kind)
            .with_float_rows(rows.clone())
            .with_text_rows(text);

        let spec = assemble_chart_spec(&table).expect("assembly");
        prop_assert!(matches!(spec.actual_mode, ChartMode::Bar | ChartMode::Line));
        prop_assert_eq!(spec.labels.len(), row_count);
        prop_assert_eq!(spec.datasets.len(), columns);
        for (i, dataset) in spec.datasets.iter().enumerate() {
            let expected: Vec<String> = rows.iter().map(|row| format_number(row[i])).collect();
            prop_assert_eq!(dataset.data.as_simple().expect("simple"), &expected[..]);
        }
    }

    #[test]
    fn bubble_rows_land_in_exactly_one_category(
        categories in proptest::collection::vec(0usize..4, 0..32)
    ) {
        let names = ["alpha", "beta", "gamma", "delta"];
        let floats = (0..categories.len()).map(|i| vec![i as f64, 1.0]).collect();
        let text = categories.iter().map(|&c| vec![names[c].to_owned()]).collect();
        let table = InputTable::new(ChartKind::Scatter)
            .with_float_rows(floats)
            .with_text_rows(text);

        let spec = assemble_chart_spec(&table).expect("assembly");
        let distinct: HashSet<usize> = categories.iter().copied().collect();
        let expected_datasets = distinct.len().max(1);
        prop_assert_eq!(spec.datasets.len(), expected_datasets);

        let total: usize = spec.datasets.iter().map(|ds| ds.data.len()).sum();
        prop_assert_eq!(total, categories.len());

        let mut seen = HashSet::new();
        for dataset in &spec.datasets {
            for point in dataset.data.as_complex().expect("points") {
                prop_assert!(seen.insert(point.x.clone()));
            }
        }
    }

    #[test]
    fn wide_range_radius_is_monotonic(
        min in -1_000.0f64..1_000.0,
        span in 50.0f64..10_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let max = min + span;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let r_lo = scatter_radius(min + lo * span, min, max);
        let r_hi = scatter_radius(min + hi * span, min, max);
        prop_assert!(r_lo <= r_hi);
        prop_assert!(r_lo >= 4.0 - 1e-9);
        prop_assert!(r_hi <= 54.0 + 1e-9);
    }

    #[test]
    fn narrow_range_radius_is_offset(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..49.999,
        t in 0.0f64..1.0
    ) {
        let max = min + span;
        prop_assume!(max - min < 50.0);
        let x = min + t * span;
        prop_assert_eq!(scatter_radius(x, min, max), x - min + 4.0);
    }
}
