//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use super::{execute, join_url};
use crate::error::RestResult;
use crate::types::{ApiResponse, PriceQuote};
use bitbank_types::Pair;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// Build the ticker URL for an asset: `{base}/{asset}_jpy/ticker`
pub fn ticker_url(base_url: &str, asset: &str) -> RestResult<Url> {
    let pair = Pair::jpy(asset)?;
    join_url(base_url, &format!("/{}/ticker", pair))
}

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get the current price quote for an asset against JPY
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "btc", "xrp")
    #[instrument(skip(self))]
    pub async fn get_price(&self, asset: &str) -> RestResult<PriceQuote> {
        let url = ticker_url(self.base_url, asset)?;
        debug!("Fetching ticker from {}", url);

        let response: ApiResponse<PriceQuote> = execute(self.client.get(url)).await?;
        response.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestError;

    #[test]
    fn test_ticker_url() {
        for asset in ["btc", "eth", "xrp", "mona", "bcc"] {
            let url = ticker_url("https://public.bitbank.cc", asset).unwrap();
            assert_eq!(
                url.as_str(),
                format!("https://public.bitbank.cc/{}_jpy/ticker", asset)
            );
        }
    }

    #[test]
    fn test_ticker_url_lowercases_symbol() {
        let url = ticker_url("https://public.bitbank.cc", "BTC").unwrap();
        assert_eq!(url.as_str(), "https://public.bitbank.cc/btc_jpy/ticker");
    }

    #[test]
    fn test_ticker_url_rejects_invalid_symbol() {
        assert!(matches!(
            ticker_url("https://public.bitbank.cc", "btc/../v1"),
            Err(RestError::RequestBuild(_))
        ));
        assert!(ticker_url("https://public.bitbank.cc", "").is_err());
    }
}
