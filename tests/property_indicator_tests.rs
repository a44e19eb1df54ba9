use chart_data_rs::core::{SampleInterval, ascending_timestamps, sma, stochastic};
use chart_data_rs::core::timeline::IntervalUnit;
use chrono::{Datelike, TimeDelta, TimeZone, Utc, Weekday};
use proptest::prelude::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

proptest! {
    #[test]
    fn sma_output_length_equals_input_length(
        window in 1usize..64,
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..256)
    ) {
        let out = sma(window, &values).expect("valid window");
        prop_assert_eq!(out.len(), values.len());
    }

    #[test]
    fn sma_sentinel_prefix_is_exact(
        window in 1usize..64,
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..256)
    ) {
        let out = sma(window, &values).expect("valid window");
        for (i, value) in out.iter().enumerate() {
            prop_assert_eq!(value.is_nan(), i + 1 < window, "index {}", i);
        }
    }

    #[test]
    fn sma_window_one_is_identity(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..256)
    ) {
        let out = sma(1, &values).expect("valid window");
        for (a, b) in out.iter().zip(&values) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn sma_windowed_mean_matches_naive_rescan(
        window in 2usize..32,
        values in prop::collection::vec(-1_000.0f64..1_000.0, 32..128)
    ) {
        let out = sma(window, &values).expect("valid window");
        for i in (window - 1)..values.len() {
            let naive: f64 =
                values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            prop_assert!((out[i] - naive).abs() <= 1e-9);
        }
    }

    #[test]
    fn stochastic_outputs_are_aligned_and_bounded(
        k_lookback in 1usize..20,
        d_smoothing in 1usize..10,
        rows in prop::collection::vec((1.0f64..1_000.0, 0.1f64..50.0, 0.0f64..1.0), 1..128)
    ) {
        // Each row derives high/low/close with close inside [low, high].
        let mut highs = Vec::with_capacity(rows.len());
        let mut lows = Vec::with_capacity(rows.len());
        let mut closes = Vec::with_capacity(rows.len());
        for (base, spread, position) in &rows {
            let low = *base;
            let high = base + spread;
            highs.push(high);
            lows.push(low);
            closes.push(low + position * spread);
        }

        let stoch = stochastic(k_lookback, d_smoothing, &highs, &lows, &closes)
            .expect("valid input");

        prop_assert_eq!(stoch.pct_k.len(), rows.len());
        prop_assert_eq!(stoch.pct_d.len(), rows.len());

        for (i, value) in stoch.pct_k.iter().enumerate() {
            if i + 1 < k_lookback {
                prop_assert!(value.is_nan());
            } else {
                prop_assert!((0.0..=100.0).contains(value), "pct_k[{}] = {}", i, value);
            }
        }

        for (i, value) in stoch.pct_d.iter().enumerate() {
            if i + 2 < k_lookback + d_smoothing {
                prop_assert!(value.is_nan());
            } else {
                prop_assert!((-1e-9..=100.0 + 1e-9).contains(value), "pct_d[{}] = {}", i, value);
            }
        }
    }

    #[test]
    fn timeline_is_ascending_and_respects_exclusions(
        span_days in 0i64..120,
        step_days in 1i64..5,
        skip_mask in prop::collection::vec(any::<bool>(), 7)
    ) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = start + TimeDelta::days(span_days);
        let skip: Vec<Weekday> = WEEKDAYS
            .iter()
            .zip(&skip_mask)
            .filter_map(|(day, &excluded)| excluded.then_some(*day))
            .collect();

        let interval = SampleInterval::new(step_days, IntervalUnit::Day).expect("positive step");
        let times = ascending_timestamps(start, end, interval, &skip).expect("valid range");

        for pair in times.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for time in &times {
            prop_assert!(!skip.contains(&time.weekday()));
            prop_assert!(*time >= start && *time <= end);
        }
    }
}
