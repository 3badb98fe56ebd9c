//! Unit tests for OBV indicator

use futures_analysis::indicators::volume::calculate_obv;
use futures_analysis::indicators::IndicatorError;
use futures_analysis::models::Series;

#[test]
fn test_obv_accumulates_by_direction() {
    let close = Series::from(vec![10.0, 11.0, 11.0, 10.0]);
    let volume = Series::from(vec![100.0, 200.0, 300.0, 400.0]);
    let obv = calculate_obv(&close, &volume).unwrap();
    assert_eq!(obv.into_inner(), vec![Some(100.0), Some(300.0), Some(300.0), Some(-100.0)]);
}

#[test]
fn test_obv_gap_keeps_running_total() {
    let close = Series::new(vec![Some(10.0), None, Some(12.0), Some(13.0)]);
    let volume = Series::from(vec![1.0, 2.0, 3.0, 4.0]);
    let obv = calculate_obv(&close, &volume).unwrap();
    assert_eq!(obv.get(0), Some(1.0));
    assert_eq!(obv.get(1), None);
    assert_eq!(obv.get(2), None);
    assert_eq!(obv.get(3), Some(5.0));
}

#[test]
fn test_obv_single_sample() {
    let obv = calculate_obv(&Series::from(vec![10.0]), &Series::from(vec![7.0])).unwrap();
    assert_eq!(obv.latest(), Some(7.0));
}

#[test]
fn test_obv_misaligned_volume() {
    let close = Series::from(vec![1.0, 2.0]);
    let volume = Series::from(vec![1.0]);
    assert_eq!(
        calculate_obv(&close, &volume),
        Err(IndicatorError::Schema {
            field: "volume".to_string()
        })
    );
}

#[test]
fn test_obv_empty() {
    assert!(matches!(
        calculate_obv(&Series::default(), &Series::default()),
        Err(IndicatorError::InsufficientData { .. })
    ));
}

#[test]
fn test_obv_non_decreasing_on_rising_closes() {
    let close: Series = (0..50).map(|i| Some(100.0 + (i / 3) as f64)).collect();
    let volume: Series = (0..50).map(|i| Some(((i * 37) % 11) as f64)).collect();
    let obv = calculate_obv(&close, &volume).unwrap();

    let values: Vec<f64> = obv.iter().flatten().collect();
    assert_eq!(values.len(), 50);
    assert!(values.windows(2).all(|w| w[1] >= w[0]));
}
