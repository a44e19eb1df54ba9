//! chart-data-rs: chart-ready market data preparation.
//!
//! This crate produces everything a charting front end needs before a single
//! pixel is drawn: ascending sampling timelines with weekday exclusions,
//! rolling indicators (simple moving average, stochastic oscillator),
//! synthetic market data, and declarative chart descriptions. Rendering is an
//! external collaborator; every output here is a plain in-memory value.

pub mod config;
pub mod core;
pub mod error;
pub mod synth;
pub mod telemetry;

pub use config::{ChartConfig, PlotConfig};
pub use crate::core::{OhlcvBar, OhlcvSeries, SampleInterval, StochasticSeries};
pub use error::{SeriesError, SeriesResult};
