//! Demo 1: JPY Price Ticker
//!
//! Showcases: Public ticker endpoint, no credentials needed
//!
//! Run: cargo run --bin price_ticker -- btc eth xrp

use bitbank_rest::BitbankRestClient;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut assets: Vec<String> = std::env::args().skip(1).collect();
    if assets.is_empty() {
        assets = vec!["btc".to_string(), "eth".to_string(), "xrp".to_string()];
    }

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  JPY PRICE TICKER".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BitbankRestClient::new();

    println!(
        "  {:<8} {:>14} {:>14} {:>14} {:>10}",
        "PAIR".dimmed(),
        "BID".dimmed(),
        "ASK".dimmed(),
        "LAST".dimmed(),
        "SPREAD".dimmed()
    );

    for asset in &assets {
        match client.get_price(asset).await {
            Ok(quote) => {
                let change = quote.last - quote.open;
                let last = if change.is_sign_negative() {
                    format!("{:.2}", quote.last).red()
                } else {
                    format!("{:.2}", quote.last).green()
                };
                println!(
                    "  {:<8} {:>14.2} {:>14.2} {:>14} {:>10.2}",
                    format!("{}_jpy", asset.to_lowercase()).yellow(),
                    quote.buy,
                    quote.sell,
                    last,
                    quote.spread()
                );
            }
            Err(e) => println!("  {:<8} {} {}", asset.yellow(), "✗".red(), e),
        }
    }

    println!();
    Ok(())
}
