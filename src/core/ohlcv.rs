use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{TimestampMs, datetime_to_epoch_millis, decimal_to_f64};
use crate::error::{SeriesError, SeriesResult};

/// One validated OHLCV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    pub time: TimestampMs,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcvBar {
    /// Builds a validated bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    /// - `volume >= 0`
    pub fn new(
        time: TimestampMs,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> SeriesResult<Self> {
        if !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
            || !volume.is_finite()
        {
            return Err(SeriesError::InvalidData(
                "ohlcv values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(SeriesError::InvalidData(
                "ohlcv low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(SeriesError::InvalidData(
                "ohlcv open/close must be within low/high range".to_owned(),
            ));
        }

        if volume < 0.0 {
            return Err(SeriesError::InvalidData(
                "ohlcv volume must be >= 0".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated bar.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> SeriesResult<Self> {
        Self::new(
            datetime_to_epoch_millis(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            decimal_to_f64(volume, "volume")?,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Index-aligned OHLCV record set stored as parallel arrays.
///
/// Every array has the same length and times are strictly increasing. The
/// record set is immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcvSeries {
    times: Vec<TimestampMs>,
    opens: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
    closes: Vec<f64>,
    volumes: Vec<f64>,
}

impl OhlcvSeries {
    /// Builds a record set from validated rows, enforcing ascending times.
    pub fn from_bars(bars: &[OhlcvBar]) -> SeriesResult<Self> {
        let mut series = Self {
            times: Vec::with_capacity(bars.len()),
            opens: Vec::with_capacity(bars.len()),
            highs: Vec::with_capacity(bars.len()),
            lows: Vec::with_capacity(bars.len()),
            closes: Vec::with_capacity(bars.len()),
            volumes: Vec::with_capacity(bars.len()),
        };

        for bar in bars {
            if let Some(&last) = series.times.last() {
                if bar.time <= last {
                    return Err(SeriesError::InvalidData(format!(
                        "ohlcv times must be strictly increasing: {} follows {}",
                        bar.time, last
                    )));
                }
            }
            series.times.push(bar.time);
            series.opens.push(bar.open);
            series.highs.push(bar.high);
            series.lows.push(bar.low);
            series.closes.push(bar.close);
            series.volumes.push(bar.volume);
        }

        Ok(series)
    }

    /// Builds a record set from parallel arrays, validating every row.
    pub fn from_arrays(
        times: Vec<TimestampMs>,
        opens: Vec<f64>,
        highs: Vec<f64>,
        lows: Vec<f64>,
        closes: Vec<f64>,
        volumes: Vec<f64>,
    ) -> SeriesResult<Self> {
        let series = Self {
            times,
            opens,
            highs,
            lows,
            closes,
            volumes,
        };
        series.validate()?;
        Ok(series)
    }

    /// Re-checks every construction invariant.
    ///
    /// Useful after deserialization, which bypasses the validating
    /// constructors.
    pub fn validate(&self) -> SeriesResult<()> {
        let len = self.times.len();
        if self.opens.len() != len
            || self.highs.len() != len
            || self.lows.len() != len
            || self.closes.len() != len
            || self.volumes.len() != len
        {
            return Err(SeriesError::InvalidData(format!(
                "ohlcv arrays must share one length: times={}, open={}, high={}, low={}, close={}, volume={}",
                len,
                self.opens.len(),
                self.highs.len(),
                self.lows.len(),
                self.closes.len(),
                self.volumes.len()
            )));
        }

        for i in 0..len {
            if i > 0 && self.times[i] <= self.times[i - 1] {
                return Err(SeriesError::InvalidData(format!(
                    "ohlcv times must be strictly increasing: {} follows {}",
                    self.times[i],
                    self.times[i - 1]
                )));
            }
            OhlcvBar::new(
                self.times[i],
                self.opens[i],
                self.highs[i],
                self.lows[i],
                self.closes[i],
                self.volumes[i],
            )?;
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[TimestampMs] {
        &self.times
    }

    #[must_use]
    pub fn opens(&self) -> &[f64] {
        &self.opens
    }

    #[must_use]
    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    #[must_use]
    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    #[must_use]
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    #[must_use]
    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    /// Returns the row at `index` as a single bar.
    #[must_use]
    pub fn bar(&self, index: usize) -> Option<OhlcvBar> {
        if index >= self.len() {
            return None;
        }
        Some(OhlcvBar {
            time: self.times[index],
            open: self.opens[index],
            high: self.highs[index],
            low: self.lows[index],
            close: self.closes[index],
            volume: self.volumes[index],
        })
    }

    /// Index of the row whose time is closest to `time`.
    #[must_use]
    pub fn nearest_index(&self, time: TimestampMs) -> Option<usize> {
        (0..self.len()).min_by_key(|&i| self.times[i].abs_diff(time))
    }

    /// Volume series carrying only rows that closed at or above their open.
    ///
    /// Rows on the other side hold the NaN sentinel so the output stays
    /// index-aligned with the record set.
    #[must_use]
    pub fn close_up_volumes(&self) -> Vec<f64> {
        self.split_volumes(true)
    }

    /// Volume series carrying only rows that closed below their open.
    #[must_use]
    pub fn close_down_volumes(&self) -> Vec<f64> {
        self.split_volumes(false)
    }

    fn split_volumes(&self, bullish: bool) -> Vec<f64> {
        (0..self.len())
            .map(|i| {
                if (self.closes[i] >= self.opens[i]) == bullish {
                    self.volumes[i]
                } else {
                    f64::NAN
                }
            })
            .collect()
    }
}
