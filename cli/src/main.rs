use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use idx_scanner::report::{RankBy, ResultLimit};
use shared::DateRange;
use tracing_subscriber::EnvFilter;

mod commands;
mod progress;

#[derive(Parser, Debug)]
#[command(name = "idx-scan", author, version, about = "Technical pattern scanner for IDX equities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the whole universe for a pattern
    Scan {
        #[arg(value_enum)]
        kind: ScanKindArg,
        /// Matches to show: a number or "all"
        #[arg(long, default_value = "5")]
        limit: ResultLimit,
        /// discovery, change or volume
        #[arg(long, default_value = "discovery")]
        rank: RankBy,
        /// Scan these symbols instead of the IDX listing
        #[arg(long, value_delimiter = ',')]
        symbols: Option<Vec<String>>,
    },
    /// Support/resistance, MACD and MA crosses for one symbol
    Analyze {
        symbol: String,
        #[arg(long, default_value_t = 30)]
        lookback: usize,
        #[arg(long, default_value_t = 3)]
        levels: usize,
        /// 30d, mtd, ytd or FROM:TO with YYYY-MM-DD or DD-MM-YYYY dates
        #[arg(long, default_value = "ytd")]
        range: DateRange,
    },
    /// Check whether the last candle is a marubozu
    Marubozu {
        symbol: String,
        /// Wide enough to clear the minimum history even across long exchange holidays
        #[arg(long, default_value = "60d")]
        range: DateRange,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScanKindArg {
    Breakout,
    Reversal,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = shared::Config::from_env()?;

    match cli.command {
        Command::Scan {
            kind,
            limit,
            rank,
            symbols,
        } => {
            let rule = match kind {
                ScanKindArg::Breakout => idx_scanner::strategy::ScanRule::breakout(),
                ScanKindArg::Reversal => idx_scanner::strategy::ScanRule::reversal(),
            };
            commands::scan::run(&config, rule, limit, rank, symbols).await
        }
        Command::Analyze {
            symbol,
            lookback,
            levels,
            range,
        } => commands::analyze::run(&config, &symbol, lookback, levels, range).await,
        Command::Marubozu { symbol, range } => {
            commands::marubozu::run(&config, &symbol, range).await
        }
    }
}
