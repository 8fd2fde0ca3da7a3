use anyhow::Result;
use idx_scanner::data::Candle;
use idx_scanner::patterns::{detect_marubozu, Marubozu, DEFAULT_BODY_THRESHOLD};
use idx_scanner::report::{format_number, format_price};
use shared::{normalize_symbol, Config, DateRange, YahooHistoryClient};
use std::fmt::Write;

pub async fn run(config: &Config, symbol: &str, range: DateRange) -> Result<()> {
    let symbol = normalize_symbol(symbol);
    let client = YahooHistoryClient::from_config(config)?;

    let candles = client.fetch_range(&symbol, range).await?;
    match candles.as_deref().and_then(|c| c.last()) {
        Some(last) => println!("{}", render_marubozu(&symbol, last)),
        None => println!("❌ No usable data for {}", symbol),
    }
    Ok(())
}

/// Last-candle OHLC with the marubozu verdict
pub fn render_marubozu(symbol: &str, candle: &Candle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🕯️ {} ({})", symbol, candle.date);
    let _ = writeln!(
        out,
        "O {} | H {} | L {} | C {}",
        format_price(candle.open),
        format_price(candle.high),
        format_price(candle.low),
        format_price(candle.close)
    );
    let _ = writeln!(out, "📊 Vol: {}", format_number(candle.volume as f64));

    let verdict = match detect_marubozu(candle, DEFAULT_BODY_THRESHOLD) {
        Some(Marubozu::Bullish) => "🟢 Bullish marubozu",
        Some(Marubozu::Bearish) => "🔴 Bearish marubozu",
        None => "⚪ Not a marubozu",
    };
    let _ = write!(out, "{}", verdict);
    out
}
