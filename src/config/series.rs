use serde::{Deserialize, Serialize};

use crate::config::style::{Color, LineStroke};
use crate::core::ohlcv::OhlcvSeries;
use crate::error::SeriesResult;

/// Line overlay bound to the chart's shared time axis.
///
/// Values may carry the NaN "insufficient history" sentinel (for example an
/// SMA prefix); the JSON surface maps the sentinel to `null` and back so
/// index alignment survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesConfig {
    pub name: Option<String>,
    #[serde(with = "nan_as_null")]
    pub values: Vec<f64>,
    pub color: Color,
    pub stroke: LineStroke,
}

impl LineSeriesConfig {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            name: None,
            values,
            color: Color::BLACK,
            stroke: LineStroke::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: LineStroke) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Candlestick rendering of an OHLCV record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeriesConfig {
    pub ohlcv: OhlcvSeries,
    pub up_color: Color,
    pub down_color: Color,
}

impl OhlcSeriesConfig {
    #[must_use]
    pub fn new(ohlcv: OhlcvSeries) -> Self {
        Self {
            ohlcv,
            up_color: Color::WHITE,
            down_color: Color::RED,
        }
    }

    #[must_use]
    pub fn with_up_color(mut self, color: Color) -> Self {
        self.up_color = color;
        self
    }

    #[must_use]
    pub fn with_down_color(mut self, color: Color) -> Self {
        self.down_color = color;
        self
    }
}

/// Which rows of the record set a volume-bar series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeDirection {
    CloseUp,
    CloseDown,
    All,
}

/// Volume bars derived from an OHLCV record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSeriesConfig {
    pub ohlcv: OhlcvSeries,
    pub direction: VolumeDirection,
    pub color: Color,
}

impl VolumeSeriesConfig {
    #[must_use]
    pub fn new(ohlcv: OhlcvSeries, direction: VolumeDirection) -> Self {
        Self {
            ohlcv,
            direction,
            color: Color::GRAY,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The volume values this series actually plots, index-aligned with the
    /// record set; filtered-out rows hold the NaN sentinel.
    #[must_use]
    pub fn plotted_volumes(&self) -> Vec<f64> {
        match self.direction {
            VolumeDirection::CloseUp => self.ohlcv.close_up_volumes(),
            VolumeDirection::CloseDown => self.ohlcv.close_down_volumes(),
            VolumeDirection::All => self.ohlcv.volumes().to_vec(),
        }
    }
}

/// One plot series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesConfig {
    Line(LineSeriesConfig),
    Ohlc(OhlcSeriesConfig),
    VolumeBars(VolumeSeriesConfig),
}

impl SeriesConfig {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Line(line) => line.name.as_deref(),
            Self::Ohlc(_) | Self::VolumeBars(_) => None,
        }
    }

    /// Number of samples the series contributes per time-axis index.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(line) => line.values.len(),
            Self::Ohlc(ohlc) => ohlc.ohlcv.len(),
            Self::VolumeBars(volume) => volume.ohlcv.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> SeriesResult<()> {
        match self {
            Self::Line(line) => {
                line.color.validate()?;
                line.stroke.validate()
            }
            Self::Ohlc(ohlc) => {
                ohlc.ohlcv.validate()?;
                ohlc.up_color.validate()?;
                ohlc.down_color.validate()
            }
            Self::VolumeBars(volume) => {
                volume.ohlcv.validate()?;
                volume.color.validate()
            }
        }
    }
}

/// Maps the NaN sentinel to JSON `null` and back.
///
/// `serde_json` cannot represent non-finite floats, and dropping sentinel
/// rows would break index alignment with the time axis.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mapped: Vec<Option<f64>> = values
            .iter()
            .map(|value| if value.is_nan() { None } else { Some(*value) })
            .collect();
        mapped.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let mapped = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(mapped
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }
}
