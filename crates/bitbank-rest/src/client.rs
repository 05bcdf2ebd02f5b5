//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, PrivateEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::types::{Asset, Order, PriceQuote, Trade};
use bitbank_auth::Credentials;
use bitbank_types::OrderSide;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Public API base URL
pub const PUBLIC_BASE_URL: &str = "https://public.bitbank.cc";
/// Private API base URL
pub const PRIVATE_BASE_URL: &str = "https://api.bitbank.cc";

const DEFAULT_USER_AGENT: &str = concat!("bitbank-rest/", env!("CARGO_PKG_VERSION"));

/// bitbank REST API client
///
/// Holds the HTTP connection pool and base URLs only. Credentials are passed
/// to every private call, so one client can serve several accounts.
///
/// # Example
///
/// ```no_run
/// use bitbank_rest::{BitbankRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BitbankRestClient::new();
///     let quote = client.get_price("btc").await?;
///
///     let creds = Credentials::from_env()?;
///     let assets = client.check_assets(&creds).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitbankRestClient {
    http_client: Client,
    public_url: String,
    private_url: String,
}

impl BitbankRestClient {
    /// Create a new client against the production endpoints
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().expect("Failed to create HTTP client");

        info!(
            public_url = %config.public_url,
            private_url = %config.private_url,
            "Created bitbank REST client"
        );

        Self {
            http_client,
            public_url: config.public_url,
            private_url: config.private_url,
        }
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.public_url)
    }

    /// Get the current price quote for an asset against JPY
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "btc", "xrp")
    pub async fn get_price(&self, asset: &str) -> RestResult<PriceQuote> {
        self.market().get_price(asset).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    fn private<'a>(&'a self, credentials: &'a Credentials) -> PrivateEndpoints<'a> {
        PrivateEndpoints::new(&self.http_client, &self.private_url, credentials)
    }

    /// Get account endpoints for an account
    pub fn account<'a>(&'a self, credentials: &'a Credentials) -> AccountEndpoints<'a> {
        AccountEndpoints::new(self.private(credentials))
    }

    /// Get balances of every asset on the account
    pub async fn check_assets(&self, credentials: &Credentials) -> RestResult<Vec<Asset>> {
        self.account(credentials).check_assets().await
    }

    /// Get executed trades for an asset against JPY
    pub async fn get_trade_history(
        &self,
        credentials: &Credentials,
        asset: &str,
    ) -> RestResult<Vec<Trade>> {
        self.account(credentials).get_trade_history(asset).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints for an account
    pub fn trading<'a>(&'a self, credentials: &'a Credentials) -> TradingEndpoints<'a> {
        TradingEndpoints::new(self.private(credentials), self.market())
    }

    /// Place a market order for an asset against JPY
    pub async fn make_trade(
        &self,
        credentials: &Credentials,
        asset: &str,
        side: OrderSide,
        amount: Decimal,
    ) -> RestResult<Order> {
        self.trading(credentials).make_trade(asset, side, amount).await
    }

    /// Spend `jpy` yen on an asset at the current buy price
    pub async fn buy_with_jpy(
        &self,
        credentials: &Credentials,
        asset: &str,
        jpy: u64,
    ) -> RestResult<Order> {
        self.trading(credentials).buy_with_jpy(asset, jpy).await
    }

    /// Sell an amount of an asset for JPY at market
    pub async fn sell_to_jpy(
        &self,
        credentials: &Credentials,
        asset: &str,
        amount: Decimal,
    ) -> RestResult<Order> {
        self.trading(credentials).sell_to_jpy(asset, amount).await
    }

    /// Look up a single order
    pub async fn get_order_info(
        &self,
        credentials: &Credentials,
        asset: &str,
        order_id: &str,
    ) -> RestResult<Order> {
        self.trading(credentials).get_order_info(asset, order_id).await
    }
}

impl Default for BitbankRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitbankRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitbankRestClient")
            .field("public_url", &self.public_url)
            .field("private_url", &self.private_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the public API
    pub public_url: String,
    /// Base URL of the private API
    pub private_url: String,
    /// Request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            public_url: PUBLIC_BASE_URL.to_string(),
            private_url: PRIVATE_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the public API base URL
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    /// Set the private API base URL
    pub fn with_private_url(mut self, url: impl Into<String>) -> Self {
        self.private_url = url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.public_url, "https://public.bitbank.cc");
        assert_eq!(config.private_url, "https://api.bitbank.cc");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_public_url("http://127.0.0.1:8080")
            .with_private_url("http://127.0.0.1:8081")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.public_url, "http://127.0.0.1:8080");
        assert_eq!(config.private_url, "http://127.0.0.1:8081");
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_debug_shows_endpoints() {
        let client = BitbankRestClient::new();
        let debug = format!("{:?}", client);
        assert!(debug.contains("https://api.bitbank.cc"));
    }
}
