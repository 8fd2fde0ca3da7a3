//! Listed-company universe from the IDX securities endpoint

use crate::config::Config;
use crate::symbols::IDX_SUFFIX;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use idx_scanner::scan::SymbolSource;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{info, warn};

/// Listing boards fetched, in order
pub const IDX_BOARDS: [&str; 5] = [
    "Utama",
    "Pengembangan",
    "Akselerasi",
    "Pemantauan Khusus",
    "Ekonomi Baru",
];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    data: Vec<Security>,
}

#[derive(Debug, Deserialize)]
struct Security {
    #[serde(rename = "Code")]
    code: String,
}

/// Yahoo-style symbols (`CODE.JK`) from one board response
pub fn parse_board(body: &str) -> Result<Vec<String>> {
    let response: BoardResponse =
        serde_json::from_str(body).context("malformed board response")?;
    Ok(response
        .data
        .into_iter()
        .map(|s| s.code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
        .map(|code| format!("{}{}", code, IDX_SUFFIX))
        .collect())
}

/// Concatenate board results in board order, skipping failed boards and repeats
pub fn merge_boards(results: Vec<(&str, Result<Vec<String>>)>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for (board, result) in results {
        match result {
            Ok(codes) => symbols.extend(codes.into_iter().filter(|s| seen.insert(s.clone()))),
            Err(e) => warn!("Skipping board {}: {:#}", board, e),
        }
    }
    symbols
}

pub struct IdxListingClient {
    client: reqwest::Client,
    base_url: String,
    board_delay: Duration,
}

impl IdxListingClient {
    pub fn new(base_url: String, timeout: Duration, board_delay: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url,
            board_delay,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.idx_base_url.clone(),
            config.http_timeout(),
            config.idx_board_delay(),
        )
    }

    pub async fn fetch_board(&self, board: &str) -> Result<Vec<String>> {
        let url = format!("{}/primary/StockData/GetSecuritiesStock", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("start", "0"),
                ("length", "9999"),
                ("code", ""),
                ("sector", ""),
                ("board", board),
                ("language", "id-id"),
            ])
            .send()
            .await
            .with_context(|| format!("request for board {} failed", board))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("board {} returned {}", board, status));
        }
        let body = response.text().await?;
        let symbols = parse_board(&body)?;
        info!("{} symbols on board {}", symbols.len(), board);
        Ok(symbols)
    }
}

#[async_trait]
impl SymbolSource for IdxListingClient {
    async fn list_symbols(&self) -> Result<Vec<String>> {
        let mut results = Vec::with_capacity(IDX_BOARDS.len());
        for (i, board) in IDX_BOARDS.iter().enumerate() {
            results.push((*board, self.fetch_board(board).await));
            if i + 1 < IDX_BOARDS.len() && !self.board_delay.is_zero() {
                tokio::time::sleep(self.board_delay).await;
            }
        }

        let symbols = merge_boards(results);
        info!("{} symbols listed across {} boards", symbols.len(), IDX_BOARDS.len());
        Ok(symbols)
    }
}
