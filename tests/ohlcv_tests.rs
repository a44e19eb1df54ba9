use chart_data_rs::core::{OhlcvBar, OhlcvSeries};
use chart_data_rs::error::SeriesError;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

fn bar(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> OhlcvBar {
    OhlcvBar::new(time, open, high, low, close, volume).expect("valid bar")
}

#[test]
fn bar_rejects_inverted_low_high() {
    let err = OhlcvBar::new(0, 10.0, 9.0, 11.0, 10.0, 100.0).expect_err("low > high");
    assert!(matches!(err, SeriesError::InvalidData(_)));
}

#[test]
fn bar_rejects_open_close_outside_range() {
    assert!(OhlcvBar::new(0, 12.0, 11.0, 9.0, 10.0, 100.0).is_err());
    assert!(OhlcvBar::new(0, 10.0, 11.0, 9.0, 8.0, 100.0).is_err());
}

#[test]
fn bar_rejects_non_finite_values() {
    assert!(OhlcvBar::new(0, f64::NAN, 11.0, 9.0, 10.0, 100.0).is_err());
    assert!(OhlcvBar::new(0, 10.0, f64::INFINITY, 9.0, 10.0, 100.0).is_err());
}

#[test]
fn bar_rejects_negative_volume() {
    assert!(OhlcvBar::new(0, 10.0, 11.0, 9.0, 10.0, -1.0).is_err());
}

#[test]
fn bar_from_decimal_time() {
    let time = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
    let bar = OhlcvBar::from_decimal_time(
        time,
        Decimal::new(1005, 1),
        Decimal::new(1030, 1),
        Decimal::new(990, 1),
        Decimal::new(1010, 1),
        Decimal::new(250_000, 0),
    )
    .expect("valid decimal bar");

    assert_eq!(bar.time, time.timestamp_millis());
    assert_eq!(bar.open, 100.5);
    assert_eq!(bar.volume, 250_000.0);
    assert!(bar.is_bullish());
}

#[test]
fn series_from_bars_requires_strictly_increasing_times() {
    let bars = [
        bar(10, 1.0, 2.0, 0.5, 1.5, 10.0),
        bar(10, 1.5, 2.5, 1.0, 2.0, 10.0),
    ];
    let err = OhlcvSeries::from_bars(&bars).expect_err("duplicate time");
    assert!(matches!(err, SeriesError::InvalidData(_)));
}

#[test]
fn series_from_arrays_rejects_mismatched_lengths() {
    let err = OhlcvSeries::from_arrays(
        vec![1, 2, 3],
        vec![1.0, 1.0, 1.0],
        vec![2.0, 2.0],
        vec![0.5, 0.5, 0.5],
        vec![1.5, 1.5, 1.5],
        vec![10.0, 10.0, 10.0],
    )
    .expect_err("short high array");
    assert!(matches!(err, SeriesError::InvalidData(_)));
}

#[test]
fn series_accessors_and_row_view() {
    let bars = [
        bar(10, 1.0, 2.0, 0.5, 1.5, 10.0),
        bar(20, 1.5, 2.5, 1.0, 1.2, 20.0),
        bar(30, 1.2, 2.2, 0.8, 2.0, 30.0),
    ];
    let series = OhlcvSeries::from_bars(&bars).expect("valid series");

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.times(), &[10, 20, 30]);
    assert_eq!(series.closes(), &[1.5, 1.2, 2.0]);
    assert_eq!(series.bar(1), Some(bars[1]));
    assert_eq!(series.bar(3), None);
}

#[test]
fn nearest_index_picks_closest_time() {
    let bars = [
        bar(100, 1.0, 2.0, 0.5, 1.5, 10.0),
        bar(200, 1.5, 2.5, 1.0, 2.0, 20.0),
        bar(400, 2.0, 3.0, 1.5, 2.5, 30.0),
    ];
    let series = OhlcvSeries::from_bars(&bars).expect("valid series");

    assert_eq!(series.nearest_index(90), Some(0));
    assert_eq!(series.nearest_index(290), Some(1));
    assert_eq!(series.nearest_index(10_000), Some(2));
    assert_eq!(OhlcvSeries::default().nearest_index(100), None);
}

#[test]
fn volume_split_preserves_index_alignment() {
    let bars = [
        bar(10, 1.0, 2.0, 0.5, 1.5, 11.0),
        bar(20, 1.5, 2.5, 1.0, 1.2, 22.0),
        bar(30, 1.2, 2.2, 0.8, 2.0, 33.0),
    ];
    let series = OhlcvSeries::from_bars(&bars).expect("valid series");

    let up = series.close_up_volumes();
    let down = series.close_down_volumes();

    assert_eq!(up.len(), 3);
    assert_eq!(down.len(), 3);

    assert_eq!(up[0], 11.0);
    assert!(down[0].is_nan());

    assert!(up[1].is_nan());
    assert_eq!(down[1], 22.0);

    assert_eq!(up[2], 33.0);
    assert!(down[2].is_nan());
}

#[test]
fn validate_catches_deserialized_inconsistency() {
    let json = r#"{
        "times": [1, 2],
        "opens": [1.0, 1.0],
        "highs": [2.0, 2.0],
        "lows": [0.5, 0.5],
        "closes": [1.5],
        "volumes": [10.0, 10.0]
    }"#;

    let series: OhlcvSeries = serde_json::from_str(json).expect("parses structurally");
    assert!(series.validate().is_err());
}
