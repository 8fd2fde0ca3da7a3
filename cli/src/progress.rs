use anyhow::Result;
use async_trait::async_trait;
use idx_scanner::scan::ProgressSink;
use tracing::info;

/// Progress sink that writes each update to the log
pub struct LogProgress;

#[async_trait]
impl ProgressSink for LogProgress {
    async fn report(&self, percent: u8, message: &str) -> Result<()> {
        info!("⏳ {}% {}", percent, message);
        Ok(())
    }
}
