use chart_data_rs::core::primitives::epoch_millis;
use chart_data_rs::core::{IntervalUnit, SampleInterval, ascending_timestamps};
use chart_data_rs::error::SeriesError;
use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Utc, Weekday};

fn monday() -> DateTime<Utc> {
    // 2024-01-01 is a Monday.
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn daily_steps_skip_excluded_weekend() {
    let start = monday();
    let end = start + TimeDelta::days(6);

    let times = ascending_timestamps(
        start,
        end,
        SampleInterval::of(IntervalUnit::Day),
        &[Weekday::Sat, Weekday::Sun],
    )
    .expect("valid range");

    assert_eq!(times.len(), 5);
    for (offset, time) in times.iter().enumerate() {
        assert_eq!(*time, start + TimeDelta::days(offset as i64));
    }
}

#[test]
fn empty_exclusion_set_keeps_every_step_point() {
    let start = monday();
    let end = start + TimeDelta::days(6);

    let times = ascending_timestamps(start, end, SampleInterval::of(IntervalUnit::Day), &[])
        .expect("valid range");

    assert_eq!(times.len(), 7);
}

#[test]
fn end_bound_is_inclusive() {
    let start = monday();
    let end = start + TimeDelta::minutes(60);

    let times = ascending_timestamps(
        start,
        end,
        SampleInterval::new(15, IntervalUnit::Minute).expect("positive step"),
        &[],
    )
    .expect("valid range");

    assert_eq!(times.len(), 5);
    assert_eq!(*times.last().unwrap(), end);
}

#[test]
fn start_equal_to_end_yields_single_point() {
    let start = monday();
    let times = ascending_timestamps(start, start, SampleInterval::of(IntervalUnit::Day), &[])
        .expect("valid range");
    assert_eq!(times, vec![start]);
}

#[test]
fn excluding_every_weekday_yields_empty_sequence() {
    let start = monday();
    let end = start + TimeDelta::days(13);
    let all_days = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    let times = ascending_timestamps(start, end, SampleInterval::of(IntervalUnit::Day), &all_days)
        .expect("all-excluded is valid, not an error");

    assert!(times.is_empty());
}

#[test]
fn start_after_end_is_invalid_range() {
    let start = monday();
    let end = start - TimeDelta::days(1);

    let err = ascending_timestamps(start, end, SampleInterval::of(IntervalUnit::Day), &[])
        .expect_err("start after end must fail");

    assert!(matches!(err, SeriesError::InvalidRange { .. }));
}

#[test]
fn zero_and_negative_steps_are_invalid() {
    assert!(matches!(
        SampleInterval::new(0, IntervalUnit::Hour),
        Err(SeriesError::InvalidStep(_))
    ));
    assert!(matches!(
        SampleInterval::new(-1, IntervalUnit::Day),
        Err(SeriesError::InvalidStep(_))
    ));
}

#[test]
fn output_is_strictly_ascending_and_duplicate_free() {
    let start = monday();
    let end = start + TimeDelta::days(60);

    let times = ascending_timestamps(
        start,
        end,
        SampleInterval::of(IntervalUnit::Day),
        &[Weekday::Wed],
    )
    .expect("valid range");

    for pair in times.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!(times.iter().all(|time| time.weekday() != Weekday::Wed));
}

#[test]
fn epoch_millis_projection_preserves_order() {
    let start = monday();
    let end = start + TimeDelta::days(9);

    let times = ascending_timestamps(
        start,
        end,
        SampleInterval::of(IntervalUnit::Day),
        &[Weekday::Sat, Weekday::Sun],
    )
    .expect("valid range");

    let millis = epoch_millis(&times);
    assert_eq!(millis.len(), times.len());
    assert_eq!(millis[0], start.timestamp_millis());
    for pair in millis.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn generation_is_deterministic() {
    let start = monday();
    let end = start + TimeDelta::days(30);
    let skip = [Weekday::Sat, Weekday::Sun];
    let interval = SampleInterval::of(IntervalUnit::Day);

    let first = ascending_timestamps(start, end, interval, &skip).expect("valid range");
    let second = ascending_timestamps(start, end, interval, &skip).expect("valid range");
    assert_eq!(first, second);
}
