use chrono::{DateTime, Datelike, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{SeriesError, SeriesResult};

/// Calendar unit of one timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

/// Validated sampling step: a positive count of a fixed unit.
///
/// Construction is the only place step validity is checked; a value of this
/// type always describes a strictly positive duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleInterval {
    count: i64,
    unit: IntervalUnit,
}

impl SampleInterval {
    pub fn new(count: i64, unit: IntervalUnit) -> SeriesResult<Self> {
        if count <= 0 {
            return Err(SeriesError::InvalidStep(format!(
                "step count must be positive, got {count}"
            )));
        }
        Ok(Self { count, unit })
    }

    /// Single-unit step shorthand.
    #[must_use]
    pub fn of(unit: IntervalUnit) -> Self {
        Self { count: 1, unit }
    }

    #[must_use]
    pub fn count(self) -> i64 {
        self.count
    }

    #[must_use]
    pub fn unit(self) -> IntervalUnit {
        self.unit
    }

    fn step(self) -> TimeDelta {
        match self.unit {
            IntervalUnit::Second => TimeDelta::seconds(self.count),
            IntervalUnit::Minute => TimeDelta::minutes(self.count),
            IntervalUnit::Hour => TimeDelta::hours(self.count),
            IntervalUnit::Day => TimeDelta::days(self.count),
            IntervalUnit::Week => TimeDelta::weeks(self.count),
        }
    }
}

/// Generates the ascending instants `start, start+step, ...` up to and
/// including `end`, omitting instants whose weekday is excluded.
///
/// The output is strictly increasing with no duplicates. An exclusion set
/// that filters out every step point yields an empty sequence, not an error.
/// The generator never consults a clock; "now" only enters as a
/// caller-supplied bound.
pub fn ascending_timestamps(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: SampleInterval,
    skip_weekdays: &[Weekday],
) -> SeriesResult<Vec<DateTime<Utc>>> {
    if start > end {
        return Err(SeriesError::InvalidRange { start, end });
    }

    let step = interval.step();

    let mut skip: SmallVec<[Weekday; 7]> = SmallVec::new();
    for day in skip_weekdays {
        if !skip.contains(day) {
            skip.push(*day);
        }
    }

    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        if !skip.contains(&current.weekday()) {
            out.push(current);
        }
        current = match current.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        count = out.len(),
        excluded_weekdays = skip.len(),
        "generated ascending timeline"
    );

    Ok(out)
}
