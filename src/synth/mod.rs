//! Synthetic series generation for demos and tests.
//!
//! Randomness always comes from a caller-supplied [`rand::Rng`], so a fixed
//! seed reproduces a series exactly.

pub mod random_walk;
pub mod sinusoid;

pub use random_walk::{RandomWalkConfig, random_ohlcv};
pub use sinusoid::{SinusoidConfig, random_sinusoid};
