//! Batch scan orchestration

pub mod context;
pub mod orchestrator;
pub mod progress;
pub mod source;

pub use context::*;
pub use orchestrator::*;
pub use progress::*;
pub use source::*;
