pub mod ohlcv;
pub mod primitives;
pub mod sma;
pub mod stochastic;
pub mod timeline;

pub use ohlcv::{OhlcvBar, OhlcvSeries};
pub use primitives::TimestampMs;
pub use sma::{MAX_WINDOW, sma, sma_batch};
pub use stochastic::{StochasticSeries, stochastic};
pub use timeline::{IntervalUnit, SampleInterval, ascending_timestamps};
