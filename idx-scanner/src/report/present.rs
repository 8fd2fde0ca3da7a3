//! Ranking, truncation and text rendering of scan results

use crate::levels::SupportResistance;
use crate::report::{format_price, format_volume_millions, ScanReport, ScanStatus};
use crate::strategy::ScanMatch;
use std::fmt::Write;
use std::str::FromStr;

/// Number of matches shown when no usable limit is given
pub const DEFAULT_RESULT_LIMIT: usize = 5;

const RULE: &str = "────────────────────";

/// How many matches to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLimit {
    Count(usize),
    All,
}

impl Default for ResultLimit {
    fn default() -> Self {
        ResultLimit::Count(DEFAULT_RESULT_LIMIT)
    }
}

impl ResultLimit {
    /// Parse `"all"` or a positive count; anything else gives the default.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return ResultLimit::All;
        }
        match input.parse::<usize>() {
            Ok(n) if n > 0 => ResultLimit::Count(n),
            _ => ResultLimit::default(),
        }
    }

    fn take(&self, available: usize) -> usize {
        match self {
            ResultLimit::Count(n) => (*n).min(available),
            ResultLimit::All => available,
        }
    }
}

impl FromStr for ResultLimit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResultLimit::parse(s))
    }
}

/// Ordering applied before truncation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankBy {
    /// Universe order
    #[default]
    Discovery,
    /// Largest open-to-close gain first
    Change,
    /// Largest session volume first
    Volume,
}

impl FromStr for RankBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discovery" | "none" => Ok(RankBy::Discovery),
            "change" => Ok(RankBy::Change),
            "volume" => Ok(RankBy::Volume),
            other => Err(format!("unknown ranking: {other}")),
        }
    }
}

/// Stable-sort a copy of `matches`; ties keep universe order.
pub fn rank(matches: &[ScanMatch], by: RankBy) -> Vec<ScanMatch> {
    let mut ranked = matches.to_vec();
    match by {
        RankBy::Discovery => {}
        RankBy::Change => ranked.sort_by(|a, b| {
            let a = a.change_percent().unwrap_or(f64::NEG_INFINITY);
            let b = b.change_percent().unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        }),
        RankBy::Volume => ranked.sort_by(|a, b| b.volume.cmp(&a.volume)),
    }
    ranked
}

/// Ranked matches cut to `limit`
pub fn select(report: &ScanReport, limit: ResultLimit, by: RankBy) -> Vec<ScanMatch> {
    let mut ranked = rank(&report.matches, by);
    ranked.truncate(limit.take(ranked.len()));
    ranked
}

/// Render a finished scan for display
pub fn format_report(report: &ScanReport, limit: ResultLimit, by: RankBy) -> String {
    let mut out = String::new();

    if report.is_empty() {
        let _ = writeln!(out, "📉 No symbols matched the criteria:");
        for line in &report.criteria {
            let _ = writeln!(out, "• {line}");
        }
    } else {
        let date = report
            .as_of
            .map(|d| d.to_string())
            .unwrap_or_else(|| "today".to_string());
        let _ = writeln!(out, "✅ {} - {}\n", report.kind, date);
        let _ = writeln!(out, "Criteria:");
        for line in &report.criteria {
            let _ = writeln!(out, "• {line}");
        }
        let _ = writeln!(out, "\nResults ({} symbols found):", report.total_matched);
        let _ = writeln!(out, "{RULE}");

        let shown = select(report, limit, by);
        for (i, m) in shown.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, m.symbol);
            let _ = writeln!(out, "   💰 Rp {}", format_price(m.close));
            let change = match m.change_percent() {
                Some(c) if c >= 0.0 => format!(" 🟢 +{c:.2}%"),
                Some(c) => format!(" 🔴 {c:.2}%"),
                None => String::new(),
            };
            let _ = writeln!(out, "   📊 Vol: {}{}", format_volume_millions(m.volume), change);
            let _ = writeln!(out, "{RULE}");
        }

        if shown.len() < report.matches.len() {
            let _ = writeln!(
                out,
                "\n💡 Showing {} of {} symbols.",
                shown.len(),
                report.matches.len()
            );
        }
    }

    let _ = writeln!(
        out,
        "\nScanned {} of {} symbols ({} without data, {} failed).",
        report.total_scanned, report.total_symbols, report.no_data, report.failed
    );
    if let ScanStatus::Partial {
        batches_done,
        batches_total,
    } = report.status
    {
        let _ = writeln!(
            out,
            "⚠️ Scan stopped early after {batches_done} of {batches_total} batches."
        );
    }

    out.trim_end().to_string()
}

/// Render support and resistance levels, nearest first, skipping missing ones
pub fn format_levels(symbol: &str, levels: &SupportResistance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 Technical analysis {symbol}");
    if let Some(close) = levels.current_close {
        let _ = writeln!(out, "💰 Close: Rp {}", format_price(close));
    }

    let resistances = levels.valid_resistances();
    if !resistances.is_empty() {
        let _ = writeln!(out, "\n🔴 Resistance:");
        for (i, r) in resistances.iter().enumerate() {
            let _ = writeln!(out, "  R{}: Rp {}", i + 1, format_price(*r));
        }
    }

    let supports = levels.valid_supports();
    if !supports.is_empty() {
        let _ = writeln!(out, "\n🟢 Support:");
        for (i, s) in supports.iter().enumerate() {
            let _ = writeln!(out, "  S{}: Rp {}", i + 1, format_price(*s));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{MatchDetails, ScanKind};
    use chrono::NaiveDate;

    fn hit(symbol: &str, open: f64, close: f64, volume: u64) -> ScanMatch {
        ScanMatch {
            symbol: symbol.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            open,
            close,
            volume,
            details: MatchDetails::Reversal {
                fast_ma: 1.0,
                slow_ma: 1.0,
            },
        }
    }

    fn report(matches: Vec<ScanMatch>) -> ScanReport {
        ScanReport {
            kind: ScanKind::Reversal,
            criteria: vec!["Bullish marubozu on the last candle".to_string()],
            total_symbols: 10,
            total_scanned: 10,
            total_matched: matches.len(),
            no_data: 1,
            failed: 0,
            as_of: matches.iter().map(|m| m.date).max(),
            matches,
            status: ScanStatus::Complete,
        }
    }

    #[test]
    fn test_result_limit_parse() {
        assert_eq!(ResultLimit::parse("all"), ResultLimit::All);
        assert_eq!(ResultLimit::parse("ALL"), ResultLimit::All);
        assert_eq!(ResultLimit::parse("12"), ResultLimit::Count(12));
        assert_eq!(ResultLimit::parse("0"), ResultLimit::Count(5));
        assert_eq!(ResultLimit::parse("-3"), ResultLimit::Count(5));
        assert_eq!(ResultLimit::parse("lots"), ResultLimit::Count(5));
    }

    #[test]
    fn test_rank_is_stable() {
        let matches = vec![
            hit("A.JK", 100.0, 110.0, 500),
            hit("B.JK", 100.0, 105.0, 900),
            hit("C.JK", 100.0, 110.0, 900),
        ];
        let by_change: Vec<_> = rank(&matches, RankBy::Change)
            .into_iter()
            .map(|m| m.symbol)
            .collect();
        assert_eq!(by_change, vec!["A.JK", "C.JK", "B.JK"]);

        let by_volume: Vec<_> = rank(&matches, RankBy::Volume)
            .into_iter()
            .map(|m| m.symbol)
            .collect();
        assert_eq!(by_volume, vec!["B.JK", "C.JK", "A.JK"]);

        let discovery: Vec<_> = rank(&matches, RankBy::Discovery)
            .into_iter()
            .map(|m| m.symbol)
            .collect();
        assert_eq!(discovery, vec!["A.JK", "B.JK", "C.JK"]);
    }

    #[test]
    fn test_format_report_truncates() {
        let r = report(vec![
            hit("A.JK", 100.0, 110.0, 1_500_000),
            hit("B.JK", 100.0, 95.0, 2_000_000),
        ]);
        let text = format_report(&r, ResultLimit::Count(1), RankBy::Discovery);
        assert!(text.contains("1. A.JK"));
        assert!(!text.contains("B.JK"));
        assert!(text.contains("+10.00%"));
        assert!(text.contains("Showing 1 of 2 symbols"));
        assert!(text.contains("2025-06-02"));

        let all = format_report(&r, ResultLimit::All, RankBy::Discovery);
        assert!(all.contains("2. B.JK"));
        assert!(all.contains("-5.00%"));
        assert!(!all.contains("Showing"));
    }

    #[test]
    fn test_format_empty_report() {
        let mut r = report(Vec::new());
        r.status = ScanStatus::Partial {
            batches_done: 1,
            batches_total: 3,
        };
        let text = format_report(&r, ResultLimit::default(), RankBy::Discovery);
        assert!(text.starts_with("📉 No symbols matched"));
        assert!(text.contains("• Bullish marubozu"));
        assert!(text.contains("after 1 of 3 batches"));
    }

    #[test]
    fn test_format_levels_skips_missing() {
        let levels = SupportResistance {
            current_close: Some(1_000.0),
            supports: vec![Some(950.0), None, None],
            resistances: vec![Some(1_050.0), Some(1_100.0), None],
        };
        let text = format_levels("BBCA.JK", &levels);
        assert!(text.contains("R1: Rp 1,050"));
        assert!(text.contains("R2: Rp 1,100"));
        assert!(!text.contains("R3"));
        assert!(text.contains("S1: Rp 950"));
        assert!(!text.contains("S2"));
    }
}
