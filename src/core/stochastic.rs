use tracing::trace;

use crate::core::sma::{sma, validate_window};
use crate::error::{SeriesError, SeriesResult};

/// Paired %K/%D output of the stochastic oscillator.
///
/// Both series are index-aligned with the input. %K carries the NaN sentinel
/// before `k_lookback - 1`; %D carries it until its own smoothing window
/// over %K is satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries {
    pub pct_k: Vec<f64>,
    pub pct_d: Vec<f64>,
}

/// Two-line stochastic oscillator over index-aligned high/low/close series.
///
/// `%K[i] = 100 * (close[i] - lowest low) / (highest high - lowest low)`
/// over the trailing `k_lookback` window. %D is the simple moving average of
/// %K with window `d_smoothing`, computed by composition with [`sma`].
///
/// A flat window (highest high equals lowest low) yields `0.0`, not NaN.
pub fn stochastic(
    k_lookback: usize,
    d_smoothing: usize,
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
) -> SeriesResult<StochasticSeries> {
    validate_window(k_lookback, "stochastic %K")?;
    validate_window(d_smoothing, "stochastic %D")?;

    if highs.len() != lows.len() || highs.len() != closes.len() {
        return Err(SeriesError::InvalidWindow(format!(
            "stochastic input series lengths differ: high={}, low={}, close={}",
            highs.len(),
            lows.len(),
            closes.len()
        )));
    }

    let len = closes.len();
    let mut pct_k = vec![f64::NAN; len];

    for i in 0..len {
        if i + 1 < k_lookback {
            continue;
        }

        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;
        for j in (i + 1 - k_lookback)..=i {
            lowest = lowest.min(lows[j]);
            highest = highest.max(highs[j]);
        }

        let range = highest - lowest;
        pct_k[i] = if range == 0.0 {
            0.0
        } else {
            100.0 * (closes[i] - lowest) / range
        };
    }

    let pct_d = sma(d_smoothing, &pct_k)?;

    trace!(k_lookback, d_smoothing, len, "computed stochastic oscillator");

    Ok(StochasticSeries { pct_k, pct_d })
}
