use tracing::trace;

#[cfg(feature = "parallel-indicators")]
use rayon::prelude::*;

use crate::error::{SeriesError, SeriesResult};

/// Upper bound on indicator window sizes, guarding against pathological input.
pub const MAX_WINDOW: usize = 100_000;

pub(crate) fn validate_window(window: usize, name: &str) -> SeriesResult<()> {
    if window == 0 {
        return Err(SeriesError::InvalidWindow(format!(
            "{name} window must be positive"
        )));
    }
    if window > MAX_WINDOW {
        return Err(SeriesError::InvalidWindow(format!(
            "{name} window {window} exceeds maximum {MAX_WINDOW}"
        )));
    }
    Ok(())
}

/// Simple moving average over a fixed window.
///
/// Output is index-aligned with `values`: positions with fewer than `window`
/// samples of history carry the `f64::NAN` sentinel, so output length always
/// equals input length. A NaN inside the input yields NaN for exactly the
/// windows that contain it, which lets NaN-prefixed series (such as a
/// stochastic %K) flow through unchanged in shape.
///
/// A window larger than the series is valid and produces an all-sentinel
/// output.
pub fn sma(window: usize, values: &[f64]) -> SeriesResult<Vec<f64>> {
    validate_window(window, "sma")?;

    // Window 1 is the identity transform, bit for bit.
    if window == 1 {
        return Ok(values.to_vec());
    }

    let mut out = vec![f64::NAN; values.len()];
    let mut sum = 0.0;
    let mut nan_in_window = 0usize;

    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() {
            nan_in_window += 1;
        } else {
            sum += value;
        }

        if i >= window {
            let leaving = values[i - window];
            if leaving.is_nan() {
                nan_in_window -= 1;
            } else {
                sum -= leaving;
            }
        }

        if i + 1 >= window && nan_in_window == 0 {
            out[i] = sum / window as f64;
        }
    }

    trace!(window, len = values.len(), "computed simple moving average");
    Ok(out)
}

/// Computes one SMA per requested window over the same input series.
///
/// Behavior matches calling [`sma`] once per window; the optional parallel
/// path only changes wall-clock time for large batches.
pub fn sma_batch(windows: &[usize], values: &[f64]) -> SeriesResult<Vec<Vec<f64>>> {
    #[cfg(feature = "parallel-indicators")]
    {
        let computed: Vec<SeriesResult<Vec<f64>>> = windows
            .par_iter()
            .map(|&window| sma(window, values))
            .collect();
        computed.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-indicators"))]
    {
        windows.iter().map(|&window| sma(window, values)).collect()
    }
}
