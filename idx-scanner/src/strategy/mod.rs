//! Symbol evaluation
//!
//! Applies one scan rule to one symbol's history and produces a match record.

pub mod evaluator;
pub mod rule;
pub mod signal;

pub use evaluator::*;
pub use rule::*;
pub use signal::*;
