pub mod analyze;
pub mod marubozu;
pub mod scan;
