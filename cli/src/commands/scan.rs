use crate::progress::LogProgress;
use anyhow::Result;
use idx_scanner::prelude::*;
use shared::{Config, IdxListingClient, StaticSymbolSource, YahooHistoryClient};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run(
    config: &Config,
    rule: ScanRule,
    limit: ResultLimit,
    rank: RankBy,
    symbols: Option<Vec<String>>,
) -> Result<()> {
    let symbols: Arc<dyn SymbolSource> = match symbols.or_else(|| config.scan_symbols.clone()) {
        Some(list) => {
            info!("Scanning {} configured symbols", list.len());
            Arc::new(StaticSymbolSource::new(list))
        }
        None => Arc::new(IdxListingClient::from_config(config)?),
    };
    let history = Arc::new(YahooHistoryClient::from_config(config)?);

    let mut scan_config = config.scan_config();
    scan_config.history_window = scan_config.history_window.max(rule.min_history());

    let (stop, handle) = StopSignal::new();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current batch");
            handle.stop();
        }
    });

    let ctx = ScanContext::new(Arc::new(LogProgress), stop);
    println!("🔍 Running {}...", rule.kind());

    let report = BatchScanner::new(symbols, history, scan_config)
        .run(&rule, &ctx)
        .await?;
    println!("{}", format_report(&report, limit, rank));
    Ok(())
}
