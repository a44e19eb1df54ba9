use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SeriesError, SeriesResult};

/// Tuning for synthetic sinusoid series.
///
/// Wavelengths are expressed in samples; the generator draws one wavelength
/// and one phase per series from the supplied RNG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinusoidConfig {
    pub amplitude: f64,
    pub min_wavelength: f64,
    pub max_wavelength: f64,
}

impl Default for SinusoidConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            min_wavelength: 16.0,
            max_wavelength: 128.0,
        }
    }
}

impl SinusoidConfig {
    /// Default wavelengths at the given amplitude.
    #[must_use]
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            ..Self::default()
        }
    }

    fn validate(self) -> SeriesResult<Self> {
        if !self.amplitude.is_finite() || self.amplitude <= 0.0 {
            return Err(SeriesError::InvalidData(
                "sinusoid amplitude must be finite and > 0".to_owned(),
            ));
        }

        if !self.min_wavelength.is_finite()
            || !self.max_wavelength.is_finite()
            || self.min_wavelength <= 0.0
            || self.min_wavelength > self.max_wavelength
        {
            return Err(SeriesError::InvalidData(
                "sinusoid wavelengths must be finite with 0 < min <= max".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Generates `len` samples of a sine wave with random phase and wavelength.
///
/// Every sample lies within `[-amplitude, amplitude]`.
pub fn random_sinusoid<R: Rng + ?Sized>(
    config: SinusoidConfig,
    len: usize,
    rng: &mut R,
) -> SeriesResult<Vec<f64>> {
    let config = config.validate()?;

    let wavelength = rng.random_range(config.min_wavelength..=config.max_wavelength);
    let phase = rng.random_range(0.0..TAU);

    let out = (0..len)
        .map(|i| config.amplitude * (TAU * i as f64 / wavelength + phase).sin())
        .collect();

    debug!(len, wavelength, "generated sinusoid series");

    Ok(out)
}
