//! Private account endpoints
//!
//! These endpoints require authentication.

use super::PrivateEndpoints;
use crate::error::RestResult;
use crate::types::{ApiResponse, Asset, AssetList, Trade, TradeList};
use bitbank_types::Pair;
use tracing::{debug, instrument};

const ASSETS_PATH: &str = "/v1/user/assets";
const TRADE_HISTORY_PATH: &str = "/v1/user/spot/trade_history";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    private: PrivateEndpoints<'a>,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(private: PrivateEndpoints<'a>) -> Self {
        Self { private }
    }

    /// Get balances of every asset on the account
    #[instrument(skip(self))]
    pub async fn check_assets(&self) -> RestResult<Vec<Asset>> {
        let response: ApiResponse<AssetList> = self.private.get(ASSETS_PATH, &[]).await?;
        let assets = response.into_result()?.assets;

        debug!("Fetched {} asset balances", assets.len());
        Ok(assets)
    }

    /// Get executed trades for an asset against JPY
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "btc")
    #[instrument(skip(self))]
    pub async fn get_trade_history(&self, asset: &str) -> RestResult<Vec<Trade>> {
        let pair = Pair::jpy(asset)?;
        let response: ApiResponse<TradeList> = self
            .private
            .get(TRADE_HISTORY_PATH, &[("pair", pair.as_str())])
            .await?;
        let trades = response.into_result()?.trades;

        debug!("Fetched {} trades for {}", trades.len(), pair);
        Ok(trades)
    }
}
