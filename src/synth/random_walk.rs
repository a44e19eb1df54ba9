use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ohlcv::{OhlcvBar, OhlcvSeries};
use crate::core::primitives::TimestampMs;
use crate::error::{SeriesError, SeriesResult};

/// Tuning for the synthetic random-walk OHLCV generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    /// Close of the imaginary bar preceding the first timestamp.
    pub initial_price: f64,
    /// Largest fractional close-to-close move per step.
    pub max_step_ratio: f64,
    /// Largest fractional high/low extension beyond the open/close span.
    pub max_spread_ratio: f64,
    pub min_volume: f64,
    pub max_volume: f64,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            max_step_ratio: 0.02,
            max_spread_ratio: 0.01,
            min_volume: 100_000.0,
            max_volume: 1_000_000.0,
        }
    }
}

impl RandomWalkConfig {
    fn validate(self) -> SeriesResult<Self> {
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(SeriesError::InvalidData(
                "random walk initial price must be finite and > 0".to_owned(),
            ));
        }

        for (name, ratio) in [
            ("step", self.max_step_ratio),
            ("spread", self.max_spread_ratio),
        ] {
            if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
                return Err(SeriesError::InvalidData(format!(
                    "random walk max {name} ratio must be finite and in (0, 1)"
                )));
            }
        }

        if !self.min_volume.is_finite()
            || !self.max_volume.is_finite()
            || self.min_volume <= 0.0
            || self.min_volume > self.max_volume
        {
            return Err(SeriesError::InvalidData(
                "random walk volume bounds must be finite with 0 < min <= max".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Generates an OHLCV record set as a random walk over the given timestamps.
///
/// Each bar opens at the previous close, moves by a bounded random fraction,
/// and extends high/low by a bounded random spread, so every row satisfies
/// the [`OhlcvBar`] invariants. Output is index-aligned with `times`.
pub fn random_ohlcv<R: Rng + ?Sized>(
    times: &[TimestampMs],
    config: RandomWalkConfig,
    rng: &mut R,
) -> SeriesResult<OhlcvSeries> {
    let config = config.validate()?;

    let mut bars = Vec::with_capacity(times.len());
    let mut last_close = config.initial_price;

    for &time in times {
        let drift = rng.random_range(-config.max_step_ratio..=config.max_step_ratio);
        let open = last_close;
        let close = last_close * (1.0 + drift);

        let high = open.max(close) * (1.0 + rng.random_range(0.0..=config.max_spread_ratio));
        let low = open.min(close) * (1.0 - rng.random_range(0.0..=config.max_spread_ratio));
        let volume = rng.random_range(config.min_volume..=config.max_volume);

        bars.push(OhlcvBar::new(time, open, high, low, close, volume)?);
        last_close = close;
    }

    debug!(count = bars.len(), "generated random walk ohlcv");

    OhlcvSeries::from_bars(&bars)
}
