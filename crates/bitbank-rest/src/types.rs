//! Types for bitbank REST API requests and responses

use bitbank_types::{utc_date, MakerTaker, OrderSide, OrderStatus, OrderType, Pair};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{RestError, RestResult};

/// Fractional digits of an order amount on the wire
pub const AMOUNT_DECIMALS: u32 = 4;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard bitbank response envelope `{success, data}`
///
/// `data` is only decoded into `T` when `success` is set; a failed envelope
/// keeps the exchange error code instead.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Success flag (`1` on the wire)
    pub success: bool,
    /// Payload (present if successful)
    pub data: Option<T>,
    /// Error code from `data.code` (present if not successful)
    pub code: Option<u32>,
}

/// Envelope as it appears on the wire, before the payload is typed
#[derive(Deserialize)]
struct RawEnvelope {
    success: serde_json::Value,
    #[serde(default)]
    data: serde_json::Value,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a response body
    ///
    /// `status` is only used to annotate decode errors.
    pub fn from_slice(status: u16, body: &[u8]) -> RestResult<Self> {
        let raw: RawEnvelope =
            serde_json::from_slice(body).map_err(|e| RestError::decode(status, e))?;

        let success = match &raw.success {
            serde_json::Value::Number(n) => n.as_u64() == Some(1),
            serde_json::Value::Bool(b) => *b,
            other => {
                return Err(RestError::Decode {
                    status,
                    message: format!("unexpected success flag: {}", other),
                })
            }
        };

        if success {
            let data = serde_json::from_value(raw.data).map_err(|e| RestError::decode(status, e))?;
            Ok(Self {
                success,
                data: Some(data),
                code: None,
            })
        } else {
            let code = raw
                .data
                .get("code")
                .and_then(serde_json::Value::as_u64)
                .and_then(|c| u32::try_from(c).ok());
            Ok(Self {
                success,
                data: None,
                code,
            })
        }
    }
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the payload, returning an error if the exchange reported a failure
    pub fn into_result(self) -> RestResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(RestError::Decode {
                status: 200,
                message: "No data in successful response".to_string(),
            }),
            (false, _) => Err(RestError::from_api_code(self.code.unwrap_or(0))),
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker quote for a pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceQuote {
    /// Best ask
    pub sell: Decimal,
    /// Best bid
    pub buy: Decimal,
    /// Price 24 hours ago
    pub open: Decimal,
    /// 24 hour high
    pub high: Decimal,
    /// 24 hour low
    pub low: Decimal,
    /// Last traded price
    pub last: Decimal,
    /// 24 hour volume
    pub vol: Decimal,
    /// Quote time in milliseconds
    pub timestamp: u64,
}

impl PriceQuote {
    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Decimal {
        (self.buy + self.sell) / Decimal::TWO
    }

    /// Get the spread (ask minus bid)
    pub fn spread(&self) -> Decimal {
        self.sell - self.buy
    }

    /// UTC date of the quote
    pub fn date(&self) -> Option<String> {
        utc_date(self.timestamp)
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Balance of one asset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    /// Asset symbol (e.g., "btc", "jpy")
    pub asset: String,
    /// Available balance
    pub free_amount: Decimal,
    /// Balance held by open orders and pending withdrawals
    pub locked_amount: Decimal,
    /// Total balance
    pub onhand_amount: Decimal,
    /// Amount precision
    #[serde(default)]
    pub amount_precision: u32,
    /// Deposits suspended
    #[serde(default)]
    pub stop_deposit: bool,
    /// Withdrawals suspended
    #[serde(default)]
    pub stop_withdrawal: bool,
}

impl Asset {
    /// Check if the account holds any of this asset
    pub fn is_empty(&self) -> bool {
        self.onhand_amount.is_zero()
    }
}

/// Payload of `/v1/user/assets`
#[derive(Debug, Clone, Deserialize)]
pub struct AssetList {
    pub assets: Vec<Asset>,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order as reported by the exchange
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Order ID
    pub order_id: u64,
    /// Trading pair
    pub pair: Pair,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Amount at placement
    #[serde(default)]
    pub start_amount: Option<Decimal>,
    /// Amount not yet executed
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    /// Amount executed so far
    pub executed_amount: Decimal,
    /// Limit price (absent for market orders)
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Average execution price
    pub average_price: Decimal,
    /// Trigger price for stop orders
    #[serde(default)]
    pub trigger_price: Option<Decimal>,
    /// Placement time in milliseconds
    pub ordered_at: u64,
    /// Order status
    pub status: OrderStatus,
    /// Time of last execution in milliseconds
    #[serde(default)]
    pub executed_at: Option<u64>,
    /// Cancellation time in milliseconds
    #[serde(default)]
    pub canceled_at: Option<u64>,
}

impl Order {
    /// UTC date the order was placed
    pub fn ordered_date(&self) -> Option<String> {
        utc_date(self.ordered_at)
    }
}

/// One execution
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    /// Trade ID
    pub trade_id: u64,
    /// Order the execution belongs to
    pub order_id: u64,
    /// Trading pair
    pub pair: Pair,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Executed amount
    pub amount: Decimal,
    /// Execution price
    pub price: Decimal,
    /// Liquidity role
    pub maker_taker: MakerTaker,
    /// Fee charged in the base asset
    pub fee_amount_base: Decimal,
    /// Fee charged in JPY
    pub fee_amount_quote: Decimal,
    /// Execution time in milliseconds
    pub executed_at: u64,
}

impl Trade {
    /// Executed value in JPY
    pub fn cost(&self) -> Decimal {
        self.price * self.amount
    }

    /// UTC date of the execution
    pub fn executed_date(&self) -> Option<String> {
        utc_date(self.executed_at)
    }
}

/// Payload of `/v1/user/spot/trade_history`
#[derive(Debug, Clone, Deserialize)]
pub struct TradeList {
    pub trades: Vec<Trade>,
}

/// Body of `POST /v1/user/spot/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Trading pair
    pub pair: Pair,
    /// Amount with exactly four fractional digits
    pub amount: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Create a market order
    ///
    /// The amount is rounded to four fractional digits and must stay positive.
    pub fn market(pair: Pair, side: OrderSide, amount: Decimal) -> RestResult<Self> {
        if amount.round_dp(AMOUNT_DECIMALS) <= Decimal::ZERO {
            return Err(RestError::RequestBuild(format!(
                "order amount must be at least 0.0001, got {}",
                amount
            )));
        }

        Ok(Self {
            pair,
            amount: format_amount(amount)?,
            side,
            order_type: OrderType::Market,
        })
    }
}

/// Format an amount with exactly four fractional digits (`0.5` -> `"0.5000"`)
///
/// Fails when the value is too large to carry four fractional digits.
pub fn format_amount(amount: Decimal) -> RestResult<String> {
    let mut rounded = amount.round_dp(AMOUNT_DECIMALS);
    rounded.rescale(AMOUNT_DECIMALS);
    if rounded.scale() != AMOUNT_DECIMALS {
        return Err(RestError::RequestBuild(format!(
            "amount {} cannot be written with {} fractional digits",
            amount, AMOUNT_DECIMALS
        )));
    }
    Ok(rounded.to_string())
}

/// Amount of an asset `jpy` buys at `buy_price`
///
/// The price is truncated to whole yen first.
pub fn amount_for_jpy(jpy: u64, buy_price: Decimal) -> RestResult<Decimal> {
    let price = buy_price.trunc();
    if price <= Decimal::ZERO {
        return Err(RestError::RequestBuild(format!(
            "buy price {} truncates to a non-positive value",
            buy_price
        )));
    }

    Decimal::from(jpy)
        .checked_div(price)
        .ok_or_else(|| RestError::RequestBuild(format!("cannot divide {} JPY by {}", jpy, price)))
}
