//! Tests for DataFrame interop.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use ratio_normalization::{
    NormalizationError, NormalizationOptions, RatioKind, table_from_frame, table_to_frame,
    zero_max_frame, zero_max_revenue,
};

fn wide_frame(periods: &[&str], columns: Vec<(&str, Vec<Option<f64>>)>) -> DataFrame {
    let mut cols: Vec<Column> = vec![Series::new("date".into(), periods.to_vec()).into_column()];
    for (name, values) in columns {
        cols.push(Series::new(name.into(), values).into_column());
    }
    DataFrame::new(cols).unwrap()
}

#[test]
fn reads_wide_frame_in_column_order() {
    let df = wide_frame(
        &["2022", "2023"],
        vec![
            ("MSFT", vec![Some(1.0), None]),
            ("AAPL", vec![Some(f64::NAN), Some(4.0)]),
        ],
    );

    let table = table_from_frame(&df, "date").unwrap();

    assert_eq!(table.shape(), (2, 2));
    assert_eq!(table.entities()[0].as_str(), "MSFT");
    assert_eq!(table.periods()[1].as_str(), "2023");
    assert_eq!(table.get("2022", "AAPL"), Some(None));
    assert_eq!(table.get("2023", "AAPL"), Some(Some(4.0)));
}

#[test]
fn writes_frame_with_period_column_first() {
    let df = wide_frame(
        &["2023"],
        vec![("A", vec![Some(100.0)]), ("B", vec![None])],
    );
    let table = table_from_frame(&df, "date").unwrap();

    let out = table_to_frame(&table, "period").unwrap();

    let names: Vec<&str> = out.get_column_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["period", "A", "B"]);
    let b = out.column("B").unwrap().f64().unwrap();
    assert_eq!(b.get(0), None);
}

#[test]
fn zero_max_frame_runs_end_to_end() {
    let eps = wide_frame(&["2023"], vec![("A", vec![Some(2.0)]), ("B", vec![Some(4.0)])]);
    let price = wide_frame(&["2023"], vec![("A", vec![Some(10.0)]), ("B", vec![Some(10.0)])]);

    let out = zero_max_frame(
        RatioKind::EarningsYield,
        &[&eps, &price],
        "date",
        &NormalizationOptions::default(),
    )
    .unwrap();

    let a = out.column("A").unwrap().f64().unwrap();
    let b = out.column("B").unwrap().f64().unwrap();
    assert_eq!(a.get(0), Some(0.5));
    assert_eq!(b.get(0), Some(1.0));
}

#[test]
fn zero_max_frame_checks_alignment() {
    let fcf = wide_frame(
        &["2023"],
        vec![
            ("A", vec![Some(1.0)]),
            ("B", vec![Some(1.0)]),
            ("C", vec![Some(1.0)]),
        ],
    );
    let cap = wide_frame(&["2023"], vec![("A", vec![Some(1.0)]), ("B", vec![Some(1.0)])]);

    let err = zero_max_frame(
        RatioKind::FreeCashFlowYield,
        &[&fcf, &cap],
        "date",
        &NormalizationOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, NormalizationError::Alignment(_)));
}

#[test]
fn non_numeric_entity_columns_are_reported() {
    let df = DataFrame::new(vec![
        Series::new("date".into(), vec!["2023"]).into_column(),
        Series::new("A".into(), vec!["n/a"]).into_column(),
        Series::new("B".into(), vec![true]).into_column(),
    ])
    .unwrap();

    let err = table_from_frame(&df, "date").unwrap_err();

    match err {
        NormalizationError::NonNumericColumn { column, dtype } => {
            assert_eq!(column, "A");
            assert!(!dtype.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_max_frame_rejects_extra_frames() {
    let df = wide_frame(&["2023"], vec![("A", vec![Some(1.0)])]);
    let err = zero_max_frame(
        RatioKind::Revenue,
        &[&df, &df, &df],
        "date",
        &NormalizationOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, NormalizationError::InputArity { found: 3, .. }));
}

#[test]
fn normalized_revenue_snapshot() {
    let df = wide_frame(
        &["2022", "2023"],
        vec![
            ("A", vec![Some(100.0), None]),
            ("B", vec![Some(50.0), None]),
        ],
    );
    let revenue = table_from_frame(&df, "date").unwrap();

    let normalized = zero_max_revenue(&revenue).unwrap();

    insta::assert_json_snapshot!(normalized, @r#"
    {
      "periods": [
        "2022",
        "2023"
      ],
      "entities": [
        "A",
        "B"
      ],
      "values": [
        [
          1.0,
          0.5
        ],
        [
          null,
          null
        ]
      ]
    }
    "#);
}
