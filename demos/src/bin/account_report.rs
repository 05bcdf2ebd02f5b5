//! Demo 2: Account Report
//!
//! Showcases: Signed private endpoints, credentials from the environment
//!
//! Run: BITBANK_API_KEY=... BITBANK_API_SECRET=... cargo run --bin account_report -- btc

use bitbank_rest::{BitbankRestClient, Credentials};
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let asset = std::env::args().nth(1).unwrap_or_else(|| "btc".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT REPORT".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let creds = Credentials::from_env()?;
    let client = BitbankRestClient::new();

    println!("{}", "--- Balances ---".bold());
    let assets = client.check_assets(&creds).await?;
    for balance in assets.iter().filter(|a| !a.is_empty()) {
        println!(
            "  {:<6} {:>18} free  {:>18} locked",
            balance.asset.yellow(),
            balance.free_amount,
            balance.locked_amount
        );
    }
    println!();

    println!("{}", format!("--- {}_jpy trades ---", asset).bold());
    let trades = client.get_trade_history(&creds, &asset).await?;
    if trades.is_empty() {
        println!("  No trades");
    }

    let mut total_fees = Decimal::ZERO;
    for trade in &trades {
        let side = match trade.side {
            bitbank_types::OrderSide::Buy => "BUY ".green(),
            bitbank_types::OrderSide::Sell => "SELL".red(),
        };
        println!(
            "  {} {} {} @ {} = {:.0} JPY (order {})",
            trade.executed_date().unwrap_or_default().dimmed(),
            side,
            trade.amount,
            trade.price,
            trade.cost(),
            trade.order_id
        );
        total_fees += trade.fee_amount_quote;
    }

    if !trades.is_empty() {
        println!();
        println!("  {} {} JPY", "Fees paid:".dimmed(), total_fees);

        let last_order = trades[0].order_id.to_string();
        let order = client.get_order_info(&creds, &asset, &last_order).await?;
        println!(
            "  {} {} is {:?}",
            "Latest order:".dimmed(),
            order.order_id,
            order.status
        );
    }

    Ok(())
}
