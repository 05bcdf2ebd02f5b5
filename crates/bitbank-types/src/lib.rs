//! Shared types for bitbank's REST API
//!
//! This crate provides the core type definitions used across the bitbank
//! client crates. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Pair`] - Trading pair (e.g., "btc_jpy")
//! - [`OrderSide`], [`OrderType`], [`OrderStatus`], [`MakerTaker`] - Order enums
//! - [`BitbankApiError`], [`BitbankErrorCode`] - Exchange error code mapping
//! - [`utc_date`] - Millisecond timestamp rendering

pub mod enums;
pub mod error_codes;
pub mod pair;
pub mod time;

// Re-export commonly used types
pub use enums::*;
pub use error_codes::*;
pub use pair::*;
pub use time::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
