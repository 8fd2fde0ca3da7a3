//! Daily history from the Yahoo Finance chart endpoint

use crate::config::Config;
use crate::date_range::DateRange;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use idx_scanner::data::Candle;
use idx_scanner::scan::HistorySource;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; StockBot/1.0)";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Turn a chart response body into ascending daily candles.
///
/// Rows missing any OHLC value are dropped and missing volume counts as zero.
/// Dates are exchange-local; when two rows share a date the later one wins.
/// Returns `None` when the symbol is unknown or fewer than `min_records` rows survive.
pub fn parse_chart(body: &str, min_records: usize) -> Result<Option<Vec<Candle>>> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).context("malformed chart response")?;

    if let Some(error) = envelope.chart.error {
        if error.code == "Not Found" {
            return Ok(None);
        }
        return Err(anyhow!("chart error {}: {}", error.code, error.description));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(None);
    };
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(None);
    };

    let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();
    let offset = result.meta.gmtoffset;
    let mut by_date: BTreeMap<NaiveDate, Candle> = BTreeMap::new();

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            at(&quote.open, i),
            at(&quote.high, i),
            at(&quote.low, i),
            at(&quote.close, i),
        ) else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(ts + offset, 0).map(|dt| dt.date_naive())
        else {
            continue;
        };
        let volume = at(&quote.volume, i)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0);

        by_date.insert(date, Candle::new(date, open, high, low, close, volume));
    }

    let candles: Vec<Candle> = by_date.into_values().collect();
    if candles.len() < min_records {
        return Ok(None);
    }
    Ok(Some(candles))
}

pub struct YahooHistoryClient {
    client: reqwest::Client,
    base_url: String,
    min_records: usize,
}

impl YahooHistoryClient {
    pub fn new(base_url: String, timeout: std::time::Duration, min_records: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url,
            min_records,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.yahoo_base_url.clone(),
            config.http_timeout(),
            config.min_history_records,
        )
    }

    /// Daily candles for `symbol` over `range`, resolved against today's UTC date
    pub async fn fetch_range(&self, symbol: &str, range: DateRange) -> Result<Option<Vec<Candle>>> {
        let span = range.resolve(Utc::now().date_naive());
        let period1 = unix_midnight(span.from);
        let period2 = unix_midnight(span.to + Duration::days(1));

        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("interval", "1d".to_string()),
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
            ])
            .send()
            .await
            .with_context(|| format!("request for {} failed", symbol))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{}: not listed on chart endpoint", symbol);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(anyhow!("chart request for {} returned {}", symbol, status));
        }

        let body = response.text().await?;
        let candles = parse_chart(&body, self.min_records)
            .with_context(|| format!("bad chart data for {}", symbol))?;
        if candles.is_none() {
            debug!("{}: fewer than {} usable records", symbol, self.min_records);
        }
        Ok(candles)
    }
}

#[async_trait]
impl HistorySource for YahooHistoryClient {
    async fn get_history(&self, symbol: &str, window: usize) -> Result<Option<Vec<Candle>>> {
        self.fetch_range(symbol, DateRange::for_sessions(window)).await
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}
