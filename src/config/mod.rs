//! Declarative chart descriptions.
//!
//! These records describe what an external plotting layer should draw. They
//! are plain immutable values with named optional fields; nothing here
//! renders, lays out, or owns a widget. The whole tree is serializable so a
//! host can persist or ship a chart setup without inventing its own format.

pub mod annotations;
pub mod series;
pub mod style;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::TimestampMs;
use crate::error::{SeriesError, SeriesResult};

pub use annotations::{
    AnnotationConfig, ArrowAnnotation, Orientation, ReferenceLine, TextAlignment, TextAnnotation,
    annotations_in_draw_order,
};
pub use series::{
    LineSeriesConfig, OhlcSeriesConfig, SeriesConfig, VolumeDirection, VolumeSeriesConfig,
};
pub use style::{Color, LineStroke, StrokePattern};

/// Inclusive index window into the shared time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One stacked sub-plot of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub y_axis_label: Option<String>,
    /// Fixed y-axis bounds; absent means the consumer autoscales.
    #[serde(default)]
    pub y_axis_range: Option<(f64, f64)>,
    #[serde(default)]
    pub y_axis_tick_size: Option<f64>,
    /// Relative vertical space this plot takes among its siblings.
    #[serde(default = "default_weight")]
    pub weight: u32,
    pub series: Vec<SeriesConfig>,
    #[serde(default)]
    pub annotations: Vec<AnnotationConfig>,
    #[serde(default)]
    pub reference_lines: Vec<ReferenceLine>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            y_axis_label: None,
            y_axis_range: None,
            y_axis_tick_size: None,
            weight: default_weight(),
            series: Vec::new(),
            annotations: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_range(mut self, min: f64, max: f64) -> Self {
        self.y_axis_range = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_y_axis_tick_size(mut self, tick_size: f64) -> Self {
        self.y_axis_tick_size = Some(tick_size);
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesConfig) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationConfig) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_reference_line(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    /// Annotations sorted by ascending x for axis-ordered drawing.
    #[must_use]
    pub fn annotations_in_draw_order(&self) -> Vec<AnnotationConfig> {
        annotations_in_draw_order(&self.annotations)
    }

    fn validate(&self, time_len: usize) -> SeriesResult<()> {
        if self.weight == 0 {
            return Err(SeriesError::InvalidData(
                "plot weight must be positive".to_owned(),
            ));
        }

        if let Some((min, max)) = self.y_axis_range {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(SeriesError::InvalidData(format!(
                    "plot y-axis range must be finite with min < max, got ({min}, {max})"
                )));
            }
        }

        if let Some(tick_size) = self.y_axis_tick_size {
            if !tick_size.is_finite() || tick_size <= 0.0 {
                return Err(SeriesError::InvalidData(
                    "plot y-axis tick size must be finite and > 0".to_owned(),
                ));
            }
        }

        for series in &self.series {
            series.validate()?;
            if series.len() != time_len {
                return Err(SeriesError::InvalidData(format!(
                    "series `{}` has {} samples but the time axis has {}",
                    series.name().unwrap_or("<unnamed>"),
                    series.len(),
                    time_len
                )));
            }
        }

        for annotation in &self.annotations {
            annotation.validate()?;
        }

        for line in &self.reference_lines {
            line.validate()?;
        }

        Ok(())
    }
}

/// Complete description of one chart: a shared time axis plus stacked plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub title: Option<String>,
    /// Epoch-millisecond time axis every series is index-aligned to.
    pub times: Vec<TimestampMs>,
    #[serde(default)]
    pub index_range: Option<IndexRange>,
    pub plots: Vec<PlotConfig>,
    /// Free-form host metadata, kept in insertion order.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(times: Vec<TimestampMs>) -> Self {
        Self {
            title: None,
            times,
            index_range: None,
            plots: Vec::new(),
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_index_range(mut self, start: usize, end: usize) -> Self {
        self.index_range = Some(IndexRange::new(start, end));
        self
    }

    #[must_use]
    pub fn with_plot(mut self, plot: PlotConfig) -> Self {
        self.plots.push(plot);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Checks the whole description: ascending time axis, in-bounds index
    /// range, and per-plot series alignment against the time axis.
    pub fn validate(&self) -> SeriesResult<()> {
        for pair in self.times.windows(2) {
            if pair[1] <= pair[0] {
                return Err(SeriesError::InvalidData(format!(
                    "chart times must be strictly increasing: {} follows {}",
                    pair[1], pair[0]
                )));
            }
        }

        if let Some(range) = self.index_range {
            if range.start > range.end || range.end >= self.times.len() {
                return Err(SeriesError::InvalidData(format!(
                    "chart index range [{}, {}] is out of bounds for {} time points",
                    range.start,
                    range.end,
                    self.times.len()
                )));
            }
        }

        for plot in &self.plots {
            plot.validate(self.times.len())?;
        }

        debug!(
            plots = self.plots.len(),
            points = self.times.len(),
            "validated chart description"
        );

        Ok(())
    }

    /// Serializes the description to pretty JSON.
    pub fn to_json_pretty(&self) -> SeriesResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SeriesError::InvalidData(format!("failed to serialize chart: {e}")))
    }

    /// Deserializes a description from JSON. Call [`ChartConfig::validate`]
    /// afterwards; parsing alone does not re-check invariants.
    pub fn from_json_str(input: &str) -> SeriesResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SeriesError::InvalidData(format!("failed to parse chart: {e}")))
    }
}

fn default_weight() -> u32 {
    1
}
