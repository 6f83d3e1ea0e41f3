//! Interactive coin-ID lookup.
//!
//! Loads the merged CoinGecko/CoinMarketCap catalog once, then reads query
//! updates from stdin and prints the filtered list as results are published
//! by the debounced search session.

mod ui;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use coinfinder_catalog::{
    CatalogService, CoinGeckoProvider, CoinMarketCapProvider, MatchPolicy, SearchSession,
};

/// Find CoinMarketCap and CoinGecko coin IDs by name or symbol.
#[derive(Parser, Debug)]
#[command(name = "coinfinder", version, about)]
struct Cli {
    /// CoinMarketCap API key
    #[arg(long, env = "CMC_API_KEY", hide_env_values = true)]
    cmc_api_key: String,

    /// Cross-reference coins on symbol alone instead of symbol + name
    #[arg(long)]
    symbol_only: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let policy = if cli.symbol_only {
        MatchPolicy::SymbolOnly
    } else {
        MatchPolicy::SymbolAndName
    };

    tracing::info!("Deriving catalog with match policy {:?}", policy);

    let service = CatalogService::with_policy(
        Arc::new(CoinMarketCapProvider::new(cli.cmc_api_key)),
        Arc::new(CoinGeckoProvider::new()),
        policy,
    );
    let catalog = service.load().await?;

    println!(
        "Loaded {} coins ({} cross-referenced to CoinGecko).",
        catalog.len(),
        catalog.matched_count()
    );
    println!("Search by coin name or symbol (ex. ETH or bitcoin); an empty line clears.");

    let session = SearchSession::spawn(catalog.entries);
    let mut results = session.results();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current_query = String::new();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    current_query = line.trim().to_string();
                    if let Some(advisory) = ui::advisory(&current_query) {
                        println!("{}", advisory);
                    }
                    session.update_query(current_query.clone());
                }
                None => break,
            },
            changed = results.changed() => {
                if changed.is_err() {
                    break;
                }
                let hits = results.borrow_and_update().clone();
                print!("{}", ui::render(&current_query, &hits));
            }
        }
    }

    session.shutdown().await;
    Ok(())
}
