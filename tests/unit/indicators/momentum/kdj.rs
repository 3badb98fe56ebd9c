//! Unit tests for KDJ indicator

use futures_analysis::indicators::momentum::{calculate_kdj, calculate_kdj_default};
use futures_analysis::indicators::IndicatorError;
use futures_analysis::models::Series;

#[test]
fn test_kdj_seeds_at_first_rsv() {
    let high = Series::from(vec![10.0, 11.0, 12.0]);
    let low = Series::from(vec![8.0, 9.0, 10.0]);
    let close = Series::from(vec![9.0, 10.0, 11.0]);

    let kdj = calculate_kdj(&high, &low, &close, 3, 3, 3).unwrap();
    assert_eq!(kdj.k.get(0), None);
    assert_eq!(kdj.k.get(1), None);
    // (11 - 8) / (12 - 8)
    assert!((kdj.k.get(2).unwrap() - 75.0).abs() < 1e-9);
    assert!((kdj.d.get(2).unwrap() - 75.0).abs() < 1e-9);
    assert!((kdj.j.get(2).unwrap() - 75.0).abs() < 1e-9);
}

#[test]
fn test_kdj_j_line_relation() {
    let n = 40;
    let close: Series = (0..n)
        .map(|i| Some(100.0 + (i as f64 * 0.4).sin() * 6.0))
        .collect();
    let high = close.map_defined(|c| c + 1.5);
    let low = close.map_defined(|c| c - 1.5);

    let kdj = calculate_kdj_default(&high, &low, &close).unwrap();
    for i in 8..n {
        let (k, d, j) = (
            kdj.k.get(i).unwrap(),
            kdj.d.get(i).unwrap(),
            kdj.j.get(i).unwrap(),
        );
        assert!((j - (3.0 * k - 2.0 * d)).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&k));
    }
}

#[test]
fn test_kdj_flat_range_is_undefined() {
    let flat = Series::from(vec![50.0; 12]);
    let kdj = calculate_kdj_default(&flat, &flat, &flat).unwrap();
    assert_eq!(kdj.k.defined_count(), 0);
    assert_eq!(kdj.j.defined_count(), 0);
}

#[test]
fn test_kdj_misaligned_columns() {
    let close = Series::from(vec![1.0; 10]);
    let high = Series::from(vec![2.0; 9]);
    assert_eq!(
        calculate_kdj_default(&high, &close, &close),
        Err(IndicatorError::Schema {
            field: "high".to_string()
        })
    );
}

#[test]
fn test_kdj_insufficient_data() {
    let short = Series::from(vec![1.0; 5]);
    assert!(matches!(
        calculate_kdj_default(&short, &short, &short),
        Err(IndicatorError::InsufficientData {
            required: 9,
            actual: 5
        })
    ));
}

#[test]
fn test_kdj_smoothing_periods_need_positive_center_of_mass() {
    let high = Series::from(vec![10.0, 11.0, 12.0]);
    let low = Series::from(vec![8.0, 9.0, 10.0]);
    let close = Series::from(vec![9.0, 10.0, 11.0]);

    assert_eq!(
        calculate_kdj(&high, &low, &close, 3, 1, 3),
        Err(IndicatorError::InsufficientData {
            required: 2,
            actual: 1
        })
    );
    assert_eq!(
        calculate_kdj(&high, &low, &close, 3, 3, 1),
        Err(IndicatorError::InsufficientData {
            required: 2,
            actual: 1
        })
    );
    assert!(calculate_kdj(&high, &low, &close, 3, 2, 2).is_ok());
}
