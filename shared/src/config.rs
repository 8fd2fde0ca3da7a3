use dotenv::dotenv;
use idx_scanner::config::ScanConfig;
use std::str::FromStr;
use std::time::Duration;

pub struct Config {
    pub yahoo_base_url: String,
    pub idx_base_url: String,
    pub http_timeout_secs: u64,
    pub idx_board_delay_ms: u64,
    pub scan_batch_size: usize,
    pub scan_batch_delay_ms: u64,
    pub scan_history_days: usize,
    pub min_history_records: usize,
    /// Replaces the IDX board listing when set
    pub scan_symbols: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            idx_base_url: "https://www.idx.co.id".to_string(),
            http_timeout_secs: 10,
            idx_board_delay_ms: 1000,
            scan_batch_size: 20,
            scan_batch_delay_ms: 500,
            scan_history_days: 25,
            min_history_records: 20,
            scan_symbols: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build from any key lookup; unset or unparseable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let number = |key: &str, default| parse_or(lookup(key), default);

        Config {
            yahoo_base_url: lookup("YAHOO_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.yahoo_base_url),
            idx_base_url: lookup("IDX_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.idx_base_url),
            http_timeout_secs: number("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs),
            idx_board_delay_ms: number("IDX_BOARD_DELAY_MS", defaults.idx_board_delay_ms),
            scan_batch_size: parse_or(lookup("SCAN_BATCH_SIZE"), defaults.scan_batch_size),
            scan_batch_delay_ms: number("SCAN_BATCH_DELAY_MS", defaults.scan_batch_delay_ms),
            scan_history_days: parse_or(lookup("SCAN_HISTORY_DAYS"), defaults.scan_history_days),
            min_history_records: parse_or(
                lookup("MIN_HISTORY_RECORDS"),
                defaults.min_history_records,
            ),
            scan_symbols: lookup("SCAN_SYMBOLS").and_then(|list| {
                let symbols: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                (!symbols.is_empty()).then_some(symbols)
            }),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn idx_board_delay(&self) -> Duration {
        Duration::from_millis(self.idx_board_delay_ms)
    }

    /// Orchestrator settings derived from the environment
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            batch_size: self.scan_batch_size,
            batch_delay_ms: self.scan_batch_delay_ms,
            history_window: self.scan_history_days,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
