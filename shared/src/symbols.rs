use anyhow::Result;
use async_trait::async_trait;
use idx_scanner::scan::SymbolSource;

/// Exchange suffix Yahoo uses for IDX listings
pub const IDX_SUFFIX: &str = ".JK";

/// Upper-case a ticker and add the IDX suffix when no exchange is given
pub fn normalize_symbol(raw: &str) -> String {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.contains('.') {
        symbol
    } else {
        format!("{}{}", symbol, IDX_SUFFIX)
    }
}

/// Fixed universe, e.g. from `SCAN_SYMBOLS`
#[derive(Debug, Clone)]
pub struct StaticSymbolSource {
    symbols: Vec<String>,
}

impl StaticSymbolSource {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let symbols = symbols
            .into_iter()
            .map(|s| normalize_symbol(s.as_ref()))
            .filter(|s| s != IDX_SUFFIX && seen.insert(s.clone()))
            .collect();
        Self { symbols }
    }
}

#[async_trait]
impl SymbolSource for StaticSymbolSource {
    async fn list_symbols(&self) -> Result<Vec<String>> {
        Ok(self.symbols.clone())
    }
}
