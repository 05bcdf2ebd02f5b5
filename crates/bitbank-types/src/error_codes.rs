//! bitbank API error code mapping
//!
//! Failed responses carry `{"success": 0, "data": {"code": <number>}}`.
//! The leading digit of the code selects the category.

use std::fmt;

/// bitbank API error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 1xxxx - system, routing and load errors
    System,
    /// 2xxxx - authentication errors
    Auth,
    /// 3xxxx - required parameter missing
    MissingParameter,
    /// 4xxxx - parameter present but invalid
    InvalidParameter,
    /// 5xxxx - account or order state errors
    Account,
    /// 6xxxx - balance and quantity limits
    Limit,
    /// 7xxxx - trading suspended or restricted
    Trading,
    /// Unknown error category
    Unknown,
}

impl ErrorCategory {
    /// Derive the category from a numeric code
    pub fn from_code(code: u32) -> Self {
        match code / 10_000 {
            1 => Self::System,
            2 => Self::Auth,
            3 => Self::MissingParameter,
            4 => Self::InvalidParameter,
            5 => Self::Account,
            6 => Self::Limit,
            7 => Self::Trading,
            _ => Self::Unknown,
        }
    }
}

/// Parsed bitbank API error with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitbankApiError {
    /// The numeric code returned by bitbank
    pub raw: u32,
    /// Parsed error code (if recognized)
    pub code: Option<BitbankErrorCode>,
    /// Error category
    pub category: ErrorCategory,
}

impl BitbankApiError {
    /// Classify a numeric error code
    pub fn from_code(raw: u32) -> Self {
        Self {
            raw,
            code: BitbankErrorCode::from_code(raw),
            category: ErrorCategory::from_code(raw),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &'static str {
        self.code
            .map(|c| c.description())
            .unwrap_or("Unrecognized error code")
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self.code, Some(BitbankErrorCode::TooManyRequests))
    }

    /// Check if the credentials or the signature were rejected
    pub fn is_auth_failure(&self) -> bool {
        self.category == ErrorCategory::Auth
    }

    /// Check if the exchange reported a temporary condition
    pub fn is_transient(&self) -> bool {
        matches!(
            self.code,
            Some(
                BitbankErrorCode::Timeout
                    | BitbankErrorCode::Maintenance
                    | BitbankErrorCode::ServerBusy
                    | BitbankErrorCode::TooManyRequests
                    | BitbankErrorCode::SystemBusy
                    | BitbankErrorCode::MinimumAmountRaised
                    | BitbankErrorCode::OrdersTemporarilyRestricted
            )
        )
    }
}

impl fmt::Display for BitbankApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.raw)
    }
}

/// Known bitbank API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitbankErrorCode {
    // === System ===
    /// 10000
    UrlNotFound,
    /// 10001
    SystemError,
    /// 10002
    ImproperJson,
    /// 10005
    Timeout,
    /// 10007
    Maintenance,
    /// 10008
    ServerBusy,
    /// 10009
    TooManyRequests,

    // === Auth ===
    /// 20001
    AuthenticationFailed,
    /// 20002
    IllegalApiKey,
    /// 20003
    ApiKeyNotFound,
    /// 20004
    NonceMissing,
    /// 20005
    SignatureMissing,
    /// 20011
    TwoFactorFailed,

    // === Missing parameters ===
    /// 30001
    AmountRequired,
    /// 30006
    OrderIdRequired,
    /// 30009
    PairRequired,
    /// 30012
    PriceRequired,
    /// 30013
    SideRequired,
    /// 30015
    OrderTypeRequired,
    /// 30016
    AssetRequired,

    // === Invalid parameters ===
    /// 40001
    InvalidAmount,
    /// 40013
    InvalidOrderId,
    /// 40017
    InvalidPair,
    /// 40020
    InvalidPrice,
    /// 40021
    InvalidSide,
    /// 40024
    InvalidOrderType,
    /// 40025
    InvalidAsset,

    // === Account / order state ===
    /// 50003
    AccountRestricted,
    /// 50005
    AccountLocked,
    /// 50008
    IdentityNotVerified,
    /// 50009
    OrderNotFound,
    /// 50010
    OrderNotCancelable,

    // === Limits ===
    /// 60001
    InsufficientBalance,
    /// 60002
    MarketBuyLimitExceeded,
    /// 60003
    AmountAboveLimit,
    /// 60004
    AmountBelowMinimum,
    /// 60005
    PriceAboveLimit,
    /// 60006
    PriceBelowLimit,

    // === Trading ===
    /// 70004
    TradingSuspended,
    /// 70005
    BuyingSuspended,
    /// 70006
    SellingSuspended,
    /// 70009
    MarketOrdersRestricted,
    /// 70010
    MinimumAmountRaised,
    /// 70011
    SystemBusy,
    /// 70013
    OrdersTemporarilyRestricted,
}

impl BitbankErrorCode {
    /// Map a numeric code to a known variant
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            10000 => Self::UrlNotFound,
            10001 | 10003 => Self::SystemError,
            10002 => Self::ImproperJson,
            10005 => Self::Timeout,
            10007 => Self::Maintenance,
            10008 => Self::ServerBusy,
            10009 => Self::TooManyRequests,

            20001 => Self::AuthenticationFailed,
            20002 => Self::IllegalApiKey,
            20003 => Self::ApiKeyNotFound,
            20004 => Self::NonceMissing,
            20005 => Self::SignatureMissing,
            20011 => Self::TwoFactorFailed,

            30001 => Self::AmountRequired,
            30006 => Self::OrderIdRequired,
            30009 => Self::PairRequired,
            30012 => Self::PriceRequired,
            30013 => Self::SideRequired,
            30015 => Self::OrderTypeRequired,
            30016 => Self::AssetRequired,

            40001 => Self::InvalidAmount,
            40013 => Self::InvalidOrderId,
            40017 => Self::InvalidPair,
            40020 => Self::InvalidPrice,
            40021 => Self::InvalidSide,
            40024 => Self::InvalidOrderType,
            40025 => Self::InvalidAsset,

            50003 => Self::AccountRestricted,
            50005 | 50006 => Self::AccountLocked,
            50008 => Self::IdentityNotVerified,
            50009 => Self::OrderNotFound,
            50010 => Self::OrderNotCancelable,

            60001 => Self::InsufficientBalance,
            60002 => Self::MarketBuyLimitExceeded,
            60003 => Self::AmountAboveLimit,
            60004 => Self::AmountBelowMinimum,
            60005 => Self::PriceAboveLimit,
            60006 => Self::PriceBelowLimit,

            70004 => Self::TradingSuspended,
            70005 => Self::BuyingSuspended,
            70006 => Self::SellingSuspended,
            70009 => Self::MarketOrdersRestricted,
            70010 => Self::MinimumAmountRaised,
            70011 => Self::SystemBusy,
            70013 => Self::OrdersTemporarilyRestricted,

            _ => return None,
        })
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::UrlNotFound => "URL not found",
            Self::SystemError => "System error",
            Self::ImproperJson => "Improper JSON format",
            Self::Timeout => "Timeout",
            Self::Maintenance => "Under maintenance",
            Self::ServerBusy => "Server is busy",
            Self::TooManyRequests => "Too many requests",

            Self::AuthenticationFailed => "API authentication failed",
            Self::IllegalApiKey => "Illegal API key",
            Self::ApiKeyNotFound => "API key does not exist",
            Self::NonceMissing => "ACCESS-NONCE header missing",
            Self::SignatureMissing => "ACCESS-SIGNATURE header missing",
            Self::TwoFactorFailed => "Two-step verification failed",

            Self::AmountRequired => "Order amount not specified",
            Self::OrderIdRequired => "Order ID not specified",
            Self::PairRequired => "Pair not specified",
            Self::PriceRequired => "Order price not specified",
            Self::SideRequired => "Order side not specified",
            Self::OrderTypeRequired => "Order type not specified",
            Self::AssetRequired => "Asset not specified",

            Self::InvalidAmount => "Order amount is invalid",
            Self::InvalidOrderId => "Order ID is invalid",
            Self::InvalidPair => "Pair is invalid",
            Self::InvalidPrice => "Order price is invalid",
            Self::InvalidSide => "Order side is invalid",
            Self::InvalidOrderType => "Order type is invalid",
            Self::InvalidAsset => "Asset is invalid",

            Self::AccountRestricted => "Account cannot perform this operation",
            Self::AccountLocked => "Account is locked",
            Self::IdentityNotVerified => "Identity verification not completed",
            Self::OrderNotFound => "Order does not exist",
            Self::OrderNotCancelable => "Order cannot be canceled",

            Self::InsufficientBalance => "Insufficient balance",
            Self::MarketBuyLimitExceeded => "Market buy amount above upper limit",
            Self::AmountAboveLimit => "Amount above upper limit",
            Self::AmountBelowMinimum => "Amount below minimum",
            Self::PriceAboveLimit => "Price above upper limit",
            Self::PriceBelowLimit => "Price below lower limit",

            Self::TradingSuspended => "Trading is suspended",
            Self::BuyingSuspended => "Buy orders are suspended",
            Self::SellingSuspended => "Sell orders are suspended",
            Self::MarketOrdersRestricted => "Market orders restricted, use a limit order",
            Self::MinimumAmountRaised => "Minimum order amount temporarily raised",
            Self::SystemBusy => "System is busy",
            Self::OrdersTemporarilyRestricted => "Orders are temporarily restricted",
        }
    }
}
