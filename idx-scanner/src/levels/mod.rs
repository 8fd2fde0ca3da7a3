//! Swing-point based support/resistance detection

pub mod support_resistance;
pub mod swing;

pub use support_resistance::*;
pub use swing::*;
