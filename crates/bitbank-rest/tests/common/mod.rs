//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON responses in bitbank's REST format and a local
//! axum server that records what the client sent.

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use bitbank_rest::{BitbankRestClient, ClientConfig, Credentials};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test_api_key";
pub const API_SECRET: &str = "test_secret";

/// Ticker for btc_jpy
pub const TICKER_RESPONSE: &str = r#"{
    "success": 1,
    "data": {
        "sell": "500001",
        "buy": "500000",
        "open": "490000",
        "high": "510000",
        "low": "480000",
        "last": "500000",
        "vol": "1234.5678",
        "timestamp": 1616492376594
    }
}"#;

/// Asset balances
pub const ASSETS_RESPONSE: &str = r#"{
    "success": 1,
    "data": {
        "assets": [
            {
                "asset": "jpy",
                "amount_precision": 4,
                "onhand_amount": "100000.0000",
                "locked_amount": "20000.0000",
                "free_amount": "80000.0000",
                "stop_deposit": false,
                "stop_withdrawal": false,
                "withdrawal_fee": { "threshold": "30000.0000", "under": "550.0000", "over": "770.0000" }
            },
            {
                "asset": "btc",
                "amount_precision": 8,
                "onhand_amount": "0.12345678",
                "locked_amount": "0.00000000",
                "free_amount": "0.12345678",
                "stop_deposit": false,
                "stop_withdrawal": false,
                "withdrawal_fee": "0.00060000"
            }
        ]
    }
}"#;

/// Market buy accepted
pub const ORDER_RESPONSE: &str = r#"{
    "success": 1,
    "data": {
        "order_id": 123,
        "pair": "btc_jpy",
        "side": "buy",
        "type": "market",
        "start_amount": "0.0200",
        "remaining_amount": "0.0200",
        "executed_amount": "0.0000",
        "price": null,
        "average_price": "0",
        "ordered_at": 1616492376594,
        "status": "UNFILLED"
    }
}"#;

/// Trade history with one execution
pub const TRADE_HISTORY_RESPONSE: &str = r#"{
    "success": 1,
    "data": {
        "trades": [
            {
                "trade_id": 9001,
                "pair": "btc_jpy",
                "order_id": 123,
                "side": "buy",
                "type": "market",
                "amount": "0.0200",
                "price": "500000",
                "maker_taker": "taker",
                "fee_amount_base": "0.0000",
                "fee_amount_quote": "12.0000",
                "executed_at": 1616492376600
            }
        ]
    }
}"#;

/// Authentication failure
pub const AUTH_FAILED_RESPONSE: &str = r#"{"success": 0, "data": {"code": 20001}}"#;

/// Gateway error page
pub const BAD_GATEWAY_HTML: &str = "<html><body>502 Bad Gateway</body></html>";

/// Test credentials
pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// Client pointed at a local server for both APIs
pub fn client_for(server: &MockServer) -> BitbankRestClient {
    BitbankRestClient::with_config(
        ClientConfig::new()
            .with_public_url(server.url())
            .with_private_url(server.url())
            .with_timeout(5),
    )
}

/// A request as received by [`MockServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query string
    pub target: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name.to_ascii_lowercase())
            .and_then(|value| value.to_str().ok())
    }
}

/// Canned HTTP response
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

struct TestServerState {
    responses: Mutex<VecDeque<CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local HTTP server answering each request with the next canned response
pub struct MockServer {
    url: String,
    state: Arc<TestServerState>,
}

impl MockServer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let state = Arc::new(TestServerState {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        });

        let handler_state = Arc::clone(&state);
        let app = Router::new().fallback(move |req: Request| {
            let state = Arc::clone(&handler_state);
            async move { mock_handler(req, state).await }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, state }
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn mock_handler(req: Request, state: Arc<TestServerState>) -> Response {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        target: parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default(),
        headers: parts.headers,
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let next = state.responses.lock().unwrap().pop_front();
    match next {
        Some(canned) => Response::builder()
            .status(StatusCode::from_u16(canned.status).unwrap())
            .header("content-type", "application/json")
            .body(Body::from(canned.body))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("no canned response left"))
            .unwrap(),
    }
}

/// Address nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
