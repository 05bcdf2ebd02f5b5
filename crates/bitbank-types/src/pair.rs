//! Trading pairs (btc_jpy format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quote currency of every pair this client trades
pub const JPY: &str = "jpy";

/// Trading pair (`{base}_{quote}`, lower case)
///
/// Deserialization goes through [`FromStr`], so malformed pairs are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(String);

impl Pair {
    /// BTC/JPY trading pair
    pub const BTC_JPY: &'static str = "btc_jpy";
    /// ETH/JPY trading pair
    pub const ETH_JPY: &'static str = "eth_jpy";
    /// XRP/JPY trading pair
    pub const XRP_JPY: &'static str = "xrp_jpy";

    /// Build the JPY pair for an asset symbol (`"BTC"` -> `"btc_jpy"`)
    pub fn jpy(asset: &str) -> Result<Self, PairParseError> {
        validate_asset(asset)?;
        Ok(Self(format!("{}_{}", asset.to_ascii_lowercase(), JPY)))
    }

    /// Get the pair as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base asset (e.g., "btc" from "btc_jpy")
    pub fn base(&self) -> &str {
        self.0.split('_').next().unwrap_or_default()
    }

    /// Get the quote asset (e.g., "jpy" from "btc_jpy")
    pub fn quote(&self) -> &str {
        self.0.split('_').nth(1).unwrap_or_default()
    }
}

/// Check that an asset symbol can be embedded in a URL path and a pair name
pub fn validate_asset(asset: &str) -> Result<(), PairParseError> {
    if asset.is_empty() {
        return Err(PairParseError::EmptyAsset);
    }
    if !asset.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PairParseError::InvalidAsset(asset.to_string()));
    }
    Ok(())
}

impl FromStr for Pair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('_')
            .ok_or_else(|| PairParseError::MissingSeparator(s.to_string()))?;

        if quote.is_empty() {
            return Err(PairParseError::InvalidFormat(s.to_string()));
        }
        validate_asset(base)?;
        validate_asset(quote)?;

        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Pair {
    type Error = PairParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.0
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Pair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error building or parsing a pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairParseError {
    #[error("Asset symbol is empty")]
    EmptyAsset,

    #[error("Asset symbol must be ASCII alphanumeric: {0:?}")]
    InvalidAsset(String),

    #[error("Pair must contain '_': {0}")]
    MissingSeparator(String),

    #[error("Invalid pair format: {0}")]
    InvalidFormat(String),
}
