//! REST API client for the bitbank cryptocurrency exchange
//!
//! This crate covers the JPY spot market: public price quotes, account
//! balances, market orders and order/trade history.
//!
//! # Features
//!
//! - **Market Data**: Ticker for any `<asset>_jpy` pair
//! - **Account**: Asset balances, trade history
//! - **Trading**: Market buy/sell, buy for a JPY amount, order lookup
//!
//! # Authentication
//!
//! Private endpoints are signed with HMAC-SHA256 (see `bitbank-auth`).
//! Credentials are passed to every private call; the client itself holds no
//! account state.
//!
//! # Example
//!
//! ```no_run
//! use bitbank_rest::{BitbankRestClient, Credentials, OrderSide};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitbankRestClient::new();
//!     let quote = client.get_price("btc").await?;
//!     println!("BTC/JPY: {}", quote.last);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let assets = client.check_assets(&creds).await?;
//!     println!("Assets: {:?}", assets);
//!
//!     let order = client.buy_with_jpy(&creds, "btc", 10_000).await?;
//!     println!("Order {} is {:?}", order.order_id, order.status);
//!
//!     let order = client
//!         .make_trade(&creds, "btc", OrderSide::Sell, Decimal::new(1, 2))
//!         .await?;
//!     println!("Order {} is {:?}", order.order_id, order.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every call returns [`RestResult`]. Transport failures surface as
//! [`RestError::Network`], undecodable bodies (including non-200 HTML pages)
//! as [`RestError::Decode`], and `success: 0` envelopes as
//! [`RestError::Api`]. Nothing is retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use bitbank_auth::Credentials;
pub use client::{BitbankRestClient, ClientConfig};
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Responses
    ApiResponse,
    // Market data
    PriceQuote,
    // Account
    Asset, Trade,
    // Trading
    Order, OrderRequest,
};

pub use bitbank_types::{Decimal, OrderSide, OrderStatus, OrderType, Pair};
