mod config;
mod console;
mod html;
mod normalize;
#[cfg(test)]
mod test_util;

use clap::Parser;
use config::AppConfig;
use connectors::{CmcConnector, MarketDataConnector};
use normalize::RefPrices;
use store::MapCache;
use tracing_subscriber::EnvFilter;

/// Query CoinMarketCap and print selected or all coins as a console
/// table or an HTML document.
#[derive(Parser, Debug)]
#[command(name = "coinwatch", version)]
struct Args {
    /// Print all coins instead of the configured selection
    #[arg(short = 'a', long)]
    all: bool,

    /// Emit an HTML document of all coins on stdout
    #[arg(long)]
    html: bool,

    /// Fetch a fresh coin map and update the cache file
    #[arg(long)]
    map: bool,

    /// Substring filter applied to coin symbols and slugs
    searchstring: Option<String>,
}

#[tokio::main]
async fn main() {
    // Quiet by default so warnings do not interleave with table output
    // unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        // Diagnostics go to stdout, next to where the table would be.
        println!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> common::Result<()> {
    let cfg = AppConfig::from_env()?;
    let connector = CmcConnector::new(cfg.api_key.clone());
    let cache = MapCache::new(&cfg.cache_path);

    if args.map {
        let entries = connector.fetch_map().await?;
        cache.write_entries(&entries)?;
        println!("Wrote new or updated file: {}", cfg.cache_path);
        return Ok(());
    }

    let records = if args.html || args.all {
        connector.fetch_all(cfg.limit).await?
    } else {
        let ids = cache.load().resolve(&cfg.selected_coins)?;
        connector.fetch_selected(&ids).await?
    };

    let refs = RefPrices::from_records(&records);
    if args.html {
        print!("{}", html::render(&records, &refs));
    } else {
        print!(
            "{}",
            console::render(&records, &refs, args.searchstring.as_deref())
        );
    }
    Ok(())
}
