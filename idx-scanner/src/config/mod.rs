//! Configuration module

pub mod rules;
pub mod scan;

pub use rules::*;
pub use scan::*;
