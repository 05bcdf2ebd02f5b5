//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use super::{MarketEndpoints, PrivateEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{amount_for_jpy, ApiResponse, Order, OrderRequest};
use bitbank_types::{OrderSide, Pair};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

const ORDER_PATH: &str = "/v1/user/spot/order";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    private: PrivateEndpoints<'a>,
    market: MarketEndpoints<'a>,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(private: PrivateEndpoints<'a>, market: MarketEndpoints<'a>) -> Self {
        Self { private, market }
    }

    /// Place a market order for an asset against JPY
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "btc")
    /// * `side` - Buy or sell
    /// * `amount` - Amount of the asset; sent with four fractional digits
    #[instrument(skip(self))]
    pub async fn make_trade(
        &self,
        asset: &str,
        side: OrderSide,
        amount: Decimal,
    ) -> RestResult<Order> {
        let order = OrderRequest::market(Pair::jpy(asset)?, side, amount)?;

        info!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.amount, order.pair
        );

        let response: ApiResponse<Order> = self.private.post(ORDER_PATH, &order).await?;
        response.into_result()
    }

    /// Spend `jpy` yen on an asset at the current buy price
    ///
    /// The quote's buy price is truncated to whole yen and
    /// `amount = jpy / price` is placed as a market buy. A failed price
    /// fetch aborts the call.
    #[instrument(skip(self))]
    pub async fn buy_with_jpy(&self, asset: &str, jpy: u64) -> RestResult<Order> {
        let quote = self.market.get_price(asset).await.map_err(|e| {
            warn!("Price fetch for {} failed, not placing order: {}", asset, e);
            e
        })?;

        let amount = amount_for_jpy(jpy, quote.buy)?;
        debug!("{} JPY at {} buys {} {}", jpy, quote.buy, amount, asset);

        self.make_trade(asset, OrderSide::Buy, amount).await
    }

    /// Sell an amount of an asset for JPY at market
    #[instrument(skip(self))]
    pub async fn sell_to_jpy(&self, asset: &str, amount: Decimal) -> RestResult<Order> {
        self.make_trade(asset, OrderSide::Sell, amount).await
    }

    /// Look up a single order
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "btc")
    /// * `order_id` - Order ID returned at placement
    #[instrument(skip(self))]
    pub async fn get_order_info(&self, asset: &str, order_id: &str) -> RestResult<Order> {
        if order_id.is_empty() {
            return Err(RestError::RequestBuild("order ID is empty".to_string()));
        }

        let pair = Pair::jpy(asset)?;
        let response: ApiResponse<Order> = self
            .private
            .get(ORDER_PATH, &[("pair", pair.as_str()), ("order_id", order_id)])
            .await?;
        response.into_result()
    }
}
