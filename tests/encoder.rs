//! Integration tests for fit/transform column reconciliation.
//!
//! These cover the encoder's observable contract: fit determinism, the
//! unknown-column policies, column-set equality under `Ignore`, numeric
//! passthrough, and serde persistence of a fitted encoder.

use std::collections::HashSet;

use onehot::{
    Column, DataFrame, EncodeError, HandleUnknown, OneHotConfig, OneHotEncoder,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn color_frame(values: &[&str]) -> DataFrame {
    DataFrame::from_columns([(
        "color".to_string(),
        Column::categorical(values.iter().copied()),
    )])
    .unwrap()
}

fn mixed_frame(ages: &[f32], colors: &[&str]) -> DataFrame {
    DataFrame::from_columns([
        ("age".to_string(), Column::numeric(ages.to_vec())),
        (
            "color".to_string(),
            Column::categorical(colors.iter().copied()),
        ),
    ])
    .unwrap()
}

fn ignore_encoder() -> OneHotEncoder {
    OneHotEncoder::new(
        OneHotConfig::builder()
            .handle_unknown(HandleUnknown::Ignore)
            .build(),
    )
}

fn names(df: &DataFrame) -> HashSet<String> {
    df.column_set()
}

// =============================================================================
// Fit Determinism
// =============================================================================

#[test]
fn fitting_twice_on_same_data_yields_same_columns() {
    let train = mixed_frame(&[25.0, 30.0], &["red", "blue"]);

    let mut a = OneHotEncoder::default();
    let mut b = OneHotEncoder::default();
    a.fit(&train).unwrap();
    b.fit(&train).unwrap();

    assert_eq!(a.fitted_columns(), b.fitted_columns());

    // Refitting the same instance is also stable.
    let first = a.fitted_columns().unwrap().clone();
    a.fit(&train).unwrap();
    assert_eq!(a.fitted_columns(), Some(&first));
}

// =============================================================================
// Error Policy
// =============================================================================

#[test]
fn error_policy_rejects_unseen_categories_by_name() {
    let mut encoder = OneHotEncoder::default();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    let err = encoder
        .transform(&color_frame(&["red", "green"]))
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnknownColumns {
            columns: vec!["color_green".to_string()]
        }
    );
}

#[test]
fn error_policy_names_every_offending_column_sorted() {
    let mut encoder = OneHotEncoder::default();
    encoder.fit(&color_frame(&["red"])).unwrap();

    let err = encoder
        .transform(&color_frame(&["green", "amber"]))
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnknownColumns {
            columns: vec!["color_amber".to_string(), "color_green".to_string()]
        }
    );
}

#[test]
fn error_policy_accepts_subset_without_restoring_missing() {
    let mut encoder = OneHotEncoder::default();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    // No new categories: passes, even though color_blue is absent.
    let out = encoder.transform(&color_frame(&["red", "red"])).unwrap();
    let got: Vec<_> = out.column_names().collect();
    assert_eq!(got, vec!["color_red"]);
}

// =============================================================================
// Ignore Policy
// =============================================================================

#[test]
fn ignore_policy_output_columns_always_equal_fitted_set() {
    let mut encoder = ignore_encoder();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();
    let fitted = encoder.fitted_columns().unwrap().clone();

    // New category, missing category, and disjoint categories.
    for input in [
        color_frame(&["red", "green"]),
        color_frame(&["red"]),
        color_frame(&["green", "yellow"]),
    ] {
        let out = encoder.transform(&input).unwrap();
        assert_eq!(names(&out), fitted);
    }
}

#[test]
fn restored_missing_columns_are_all_zero() {
    let mut encoder = ignore_encoder();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    let out = encoder.transform(&color_frame(&["red", "red"])).unwrap();
    let blue = out.column("color_blue").unwrap().as_indicator().unwrap();
    assert_eq!(blue.to_dense(), vec![0, 0]);

    let red = out.column("color_red").unwrap().as_indicator().unwrap();
    assert_eq!(red.to_dense(), vec![1, 1]);
}

#[test]
fn ignore_policy_with_sparse_output_restores_sparse_zeros() {
    let config = OneHotConfig::builder()
        .sparse(true)
        .handle_unknown(HandleUnknown::Ignore)
        .build();
    let mut encoder = OneHotEncoder::new(config);
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    let out = encoder.transform(&color_frame(&["red", "red"])).unwrap();
    let blue = out.column("color_blue").unwrap().as_indicator().unwrap();
    assert!(blue.is_sparse());
    assert_eq!(blue.n_ones(), 0);
    assert_eq!(blue.len(), 2);
}

#[test]
fn ignore_policy_handles_fully_disjoint_categories() {
    let mut encoder = ignore_encoder();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    // Every expanded column is dropped; every fitted column is restored.
    let out = encoder.transform(&color_frame(&["green", "yellow"])).unwrap();
    assert_eq!(names(&out), encoder.fitted_columns().unwrap().clone());
    assert_eq!(out.n_rows(), 2);
    for (_, column) in out.columns() {
        assert_eq!(column.as_indicator().unwrap().n_ones(), 0);
    }
}

// =============================================================================
// Non-Categorical Passthrough
// =============================================================================

#[test]
fn numeric_columns_pass_through_unrenamed_and_unmodified() {
    let train = mixed_frame(&[25.0, 30.0], &["red", "blue"]);
    let mut encoder = ignore_encoder();

    let out = encoder.fit_transform(&train).unwrap();
    assert_eq!(
        out.column("age").unwrap().as_numeric(),
        Some(&[25.0, 30.0][..])
    );

    let test = mixed_frame(&[40.0, 50.0], &["blue", "green"]);
    let out = encoder.transform(&test).unwrap();
    assert_eq!(
        out.column("age").unwrap().as_numeric(),
        Some(&[40.0, 50.0][..])
    );
}

// =============================================================================
// Concrete Scenario (Error vs Ignore)
// =============================================================================

#[test]
fn red_blue_fit_red_green_transform() {
    let train = color_frame(&["red", "blue"]);
    let test = color_frame(&["red", "green"]);

    let mut strict = OneHotEncoder::default();
    strict.fit(&train).unwrap();
    let fitted: HashSet<String> = ["color_red", "color_blue"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(strict.fitted_columns(), Some(&fitted));

    let err = strict.transform(&test).unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnknownColumns {
            columns: vec!["color_green".to_string()]
        }
    );

    let mut lenient = ignore_encoder();
    lenient.fit(&train).unwrap();
    let out = lenient.transform(&test).unwrap();
    assert_eq!(names(&out), fitted);
    assert!(out.column("color_green").is_none());

    // The green row encodes as all zeros.
    let red = out.column("color_red").unwrap().as_indicator().unwrap();
    let blue = out.column("color_blue").unwrap().as_indicator().unwrap();
    assert_eq!(red.get(1), 0);
    assert_eq!(blue.get(1), 0);
    assert_eq!(red.get(0), 1);
}

// =============================================================================
// Encoded Output as a Matrix
// =============================================================================

#[test]
fn encoded_frame_exports_to_ndarray() {
    use approx::assert_relative_eq;

    let train = mixed_frame(&[25.0, 30.0], &["red", "blue"]);
    let mut encoder = ignore_encoder();
    let out = encoder.fit_transform(&train).unwrap();

    let m = out.to_ndarray().unwrap();
    assert_eq!(m.shape(), &[2, 3]);
    assert_relative_eq!(m[[0, 0]], 25.0);
    assert_relative_eq!(m[[1, 0]], 30.0);
    // Indicator columns export as 0.0/1.0.
    let row_sums: Vec<f32> = (0..2).map(|r| m[[r, 1]] + m[[r, 2]]).collect();
    assert_relative_eq!(row_sums[0], 1.0);
    assert_relative_eq!(row_sums[1], 1.0);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn fitted_encoder_round_trips_through_serde() {
    let mut encoder = ignore_encoder();
    encoder.fit(&color_frame(&["red", "blue"])).unwrap();

    let json = serde_json::to_string(&encoder).unwrap();
    let restored: OneHotEncoder = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.config(), encoder.config());
    assert_eq!(restored.fitted_columns(), encoder.fitted_columns());

    let out = restored.transform(&color_frame(&["green"])).unwrap();
    assert_eq!(names(&out), encoder.fitted_columns().unwrap().clone());
}
