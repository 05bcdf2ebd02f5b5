//! Side, OrderType, OrderStatus and MakerTaker enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Market order - executes immediately at best available price
    Market,
    /// Limit order - executes at specified price or better
    Limit,
    /// Stop order - market order once the trigger price is hit
    Stop,
    /// Stop-limit order - limit order once the trigger price is hit
    StopLimit,
    /// Take-profit order
    TakeProfit,
    /// Stop-loss order
    StopLoss,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}

impl OrderType {
    /// Returns the order type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::StopLimit => "stop_limit",
            Self::TakeProfit => "take_profit",
            Self::StopLoss => "stop_loss",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Trigger order waiting for its trigger price
    Inactive,
    /// Accepted, nothing executed yet
    Unfilled,
    /// Partially executed
    PartiallyFilled,
    /// Completely executed
    FullyFilled,
    /// Canceled before any execution
    CanceledUnfilled,
    /// Canceled after partial execution
    CanceledPartiallyFilled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns true if the order can still execute
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Inactive | Self::Unfilled | Self::PartiallyFilled)
    }

    /// Returns true if the order was canceled
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::CanceledUnfilled | Self::CanceledPartiallyFilled)
    }
}

/// Liquidity role of an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MakerTaker {
    /// Added liquidity to the book
    Maker,
    /// Removed liquidity from the book
    Taker,
}
