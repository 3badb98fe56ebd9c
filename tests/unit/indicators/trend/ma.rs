//! Unit tests for MA indicator

use futures_analysis::indicators::trend::{calculate_ma, calculate_ma_default};
use futures_analysis::indicators::IndicatorError;
use futures_analysis::models::Series;

fn sample_closes() -> Series {
    Series::from(vec![
        9570.0, 9495.0, 9446.0, 9400.0, 9485.0, 9450.0, 9480.0, 9520.0, 9550.0, 9570.0,
    ])
}

#[test]
fn test_ma5_on_sample_closes() {
    let ma = calculate_ma_default(&sample_closes()).unwrap();
    assert_eq!(ma.len(), 10);
    for i in 0..4 {
        assert_eq!(ma.get(i), None, "index {i} should be undefined");
    }
    assert!((ma.get(4).unwrap() - 9479.2).abs() < 1e-9);
    assert!((ma.latest().unwrap() - 9514.0).abs() < 1e-9);
}

#[test]
fn test_ma_period_one_is_identity() {
    let closes = sample_closes();
    assert_eq!(calculate_ma(&closes, 1).unwrap(), closes);
}

#[test]
fn test_ma_insufficient_data() {
    let closes = Series::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        calculate_ma(&closes, 5),
        Err(IndicatorError::InsufficientData {
            required: 5,
            actual: 3
        })
    );
}

#[test]
fn test_ma_zero_period() {
    assert!(matches!(
        calculate_ma(&sample_closes(), 0),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
