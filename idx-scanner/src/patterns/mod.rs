//! Pattern classifiers
//!
//! Pure predicates over ascending daily candles. Short input is a "no signal"
//! outcome, never a panic, so one bad symbol cannot sink a batch.

pub mod breakout;
pub mod candle;
pub mod composite;
pub mod cross;

pub use breakout::*;
pub use candle::*;
pub use composite::*;
pub use cross::*;
