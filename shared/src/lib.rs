pub mod config;
pub mod date_range;
pub mod idx;
pub mod symbols;
pub mod yahoo;

pub use config::Config;
pub use date_range::{parse_ddmmyyyy, DateRange, DateRangeError, DateSpan};
pub use idx::{IdxListingClient, IDX_BOARDS};
pub use symbols::{normalize_symbol, StaticSymbolSource};
pub use yahoo::YahooHistoryClient;
