use anyhow::Result;
use idx_scanner::data::Candle;
use idx_scanner::indicators::{macd, MacdParams};
use idx_scanner::levels::calculate_support_resistance;
use idx_scanner::patterns::{find_crosses, trend_phase, CrossKind, TrendPhase};
use idx_scanner::report::{format_levels, format_number, format_price};
use shared::{normalize_symbol, Config, DateRange, YahooHistoryClient};
use std::fmt::Write;
use tracing::info;

const FAST_MA: usize = 5;
const SLOW_MA: usize = 20;
const RECENT_CROSSES: usize = 3;

pub async fn run(
    config: &Config,
    symbol: &str,
    lookback: usize,
    levels: usize,
    range: DateRange,
) -> Result<()> {
    let symbol = normalize_symbol(symbol);
    let client = YahooHistoryClient::from_config(config)?;

    info!("Fetching {} history for {}", range, symbol);
    match client.fetch_range(&symbol, range).await? {
        Some(candles) => println!("{}", render_analysis(&symbol, &candles, lookback, levels)),
        None => println!("❌ No usable data for {} ({})", symbol, range),
    }
    Ok(())
}

/// Levels, momentum and trend summary for one symbol
pub fn render_analysis(symbol: &str, candles: &[Candle], lookback: usize, levels: usize) -> String {
    let Some(last) = candles.last() else {
        return format!("❌ No usable data for {}", symbol);
    };

    let mut out = format_levels(symbol, &calculate_support_resistance(candles, lookback, levels));
    let _ = write!(
        out,
        "\n📅 {}  📊 Vol: {}",
        last.date,
        format_number(last.volume as f64)
    );

    let _ = writeln!(out, "\n\n📈 MACD (12, 26, 9):");
    let result = macd(candles, MacdParams::default());
    match result.latest(candles) {
        Some(point) => {
            let momentum = if point.histogram >= 0.0 {
                "🟢 above signal"
            } else {
                "🔴 below signal"
            };
            let _ = writeln!(
                out,
                "  MACD {:.2} | Signal {:.2} | Histogram {:.2} ({})",
                point.macd, point.signal, point.histogram, momentum
            );
        }
        None => {
            let _ = writeln!(out, "  not enough history");
        }
    }

    match trend_phase(candles, FAST_MA, SLOW_MA) {
        Some(TrendPhase::Bullish) => {
            let _ = writeln!(out, "\n📶 Trend: bullish (MA{FAST_MA} above MA{SLOW_MA})");
        }
        Some(TrendPhase::Bearish) => {
            let _ = writeln!(out, "\n📶 Trend: bearish (MA{FAST_MA} below MA{SLOW_MA})");
        }
        None => {}
    }

    let crosses = find_crosses(candles, FAST_MA, SLOW_MA);
    if !crosses.is_empty() {
        let _ = writeln!(out, "\n✂️ Recent crosses:");
        for event in crosses.iter().rev().take(RECENT_CROSSES) {
            let label = match event.kind {
                CrossKind::Golden => "🟢 Golden cross",
                CrossKind::Dead => "🔴 Dead cross",
            };
            let _ = writeln!(
                out,
                "  {} {} @ Rp {}",
                label,
                event.date,
                format_price(event.price)
            );
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> Vec<Candle> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Candle::new(
                    start + chrono::Duration::days(i as i64),
                    c,
                    c + 2.0,
                    c - 2.0,
                    c,
                    2_500_000,
                )
            })
            .collect()
    }

    #[test]
    fn test_short_history_skips_macd() {
        let candles = series(&[100.0; 10]);
        let text = render_analysis("BBCA.JK", &candles, 30, 3);
        assert!(text.starts_with("📊 Technical analysis BBCA.JK"));
        assert!(text.contains("not enough history"));
        assert!(text.contains("2.50M"));
        assert!(!text.contains("Trend"));
    }

    #[test]
    fn test_full_analysis_sections() {
        let mut closes: Vec<f64> = (0..20).map(|i| 120.0 - i as f64).collect();
        closes.extend((0..20).map(|i| 125.0 + i as f64));
        let text = render_analysis("BBCA.JK", &series(&closes), 30, 3);
        assert!(text.contains("MACD "));
        assert!(text.contains("Trend: bullish"));
        assert!(text.contains("Golden cross"));
    }

    #[test]
    fn test_empty_history() {
        assert!(render_analysis("XXXX.JK", &[], 30, 3).contains("No usable data"));
    }
}
