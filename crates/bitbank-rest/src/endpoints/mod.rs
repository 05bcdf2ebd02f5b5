//! API endpoint implementations

pub mod account;
pub mod market;
pub mod private;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use private::PrivateEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};
use crate::types::ApiResponse;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Join a base URL and an absolute API path
pub(crate) fn join_url(base_url: &str, path: &str) -> RestResult<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| RestError::RequestBuild(format!("invalid URL {}: {}", raw, e)))
}

/// Send a request and decode the envelope around `T`
///
/// The success flag is not checked here; callers unwrap with
/// [`ApiResponse::into_result`].
pub(crate) async fn execute<T: DeserializeOwned>(
    request: RequestBuilder,
) -> RestResult<ApiResponse<T>> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "Non-success HTTP status");
    }

    ApiResponse::from_slice(status.as_u16(), &body)
}
