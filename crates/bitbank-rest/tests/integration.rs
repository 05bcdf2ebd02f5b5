//! Integration tests for the bitbank REST client
//!
//! Runs the client against a local HTTP server and checks both what was sent
//! (paths, headers, signatures, bodies) and how responses are decoded.

mod common;

use bitbank_rest::{
    BitbankRestClient, ClientConfig, Credentials, OrderSide, OrderStatus, RestError,
};
use common::*;
use rust_decimal_macros::dec;

// =============================================================================
// Public Price Fetcher
// =============================================================================

#[tokio::test]
async fn test_get_price() {
    let server = MockServer::start(vec![CannedResponse::ok(TICKER_RESPONSE)]).await;
    let client = client_for(&server);

    let quote = client.get_price("btc").await.unwrap();
    assert_eq!(quote.buy, dec!(500000));
    assert_eq!(quote.sell, dec!(500001));
    assert_eq!(quote.vol, dec!(1234.5678));
    assert_eq!(quote.timestamp, 1616492376594);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/btc_jpy/ticker");
    assert!(requests[0].header("ACCESS-KEY").is_none());
}

#[tokio::test]
async fn test_get_price_rejects_bad_symbol_without_request() {
    let server = MockServer::start(vec![]).await;
    let client = client_for(&server);

    let result = client.get_price("btc/../v1").await;
    assert!(matches!(result, Err(RestError::RequestBuild(_))));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_get_price_bad_gateway_is_decode_error() {
    let server =
        MockServer::start(vec![CannedResponse::status(502, BAD_GATEWAY_HTML)]).await;
    let client = client_for(&server);

    let result = client.get_price("btc").await;
    assert!(matches!(result, Err(RestError::Decode { status: 502, .. })));
}

#[tokio::test]
async fn test_get_price_malformed_json_is_decode_error() {
    let server = MockServer::start(vec![CannedResponse::ok(r#"{"success": 1, "data": "#)]).await;
    let client = client_for(&server);

    let result = client.get_price("btc").await;
    assert!(matches!(result, Err(RestError::Decode { status: 200, .. })));
}

#[tokio::test]
async fn test_get_price_connection_refused_is_network_error() {
    let url = closed_port_url().await;
    let client = BitbankRestClient::with_config(ClientConfig::new().with_public_url(url));

    let result = client.get_price("btc").await;
    assert!(matches!(result, Err(RestError::Network(_))));
}

// =============================================================================
// Authenticated Dispatch
// =============================================================================

#[tokio::test]
async fn test_check_assets_signs_path() {
    let server = MockServer::start(vec![CannedResponse::ok(ASSETS_RESPONSE)]).await;
    let client = client_for(&server);
    let creds = credentials();

    let assets = client.check_assets(&creds).await.unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].asset, "jpy");
    assert_eq!(assets[0].free_amount, dec!(80000));
    assert_eq!(assets[0].locked_amount, dec!(20000));
    assert_eq!(assets[1].asset, "btc");
    assert_eq!(assets[1].amount_precision, 8);

    let request = &server.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/v1/user/assets");
    assert_eq!(request.header("ACCESS-KEY"), Some(API_KEY));
    assert_eq!(request.header("Content-Type"), Some("application/json"));

    let nonce = request.header("ACCESS-NONCE").unwrap();
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(
        request.header("ACCESS-SIGNATURE"),
        Some(creds.sign(nonce, "/v1/user/assets").as_str())
    );
}

#[tokio::test]
async fn test_each_request_gets_a_new_nonce() {
    let server = MockServer::start(vec![
        CannedResponse::ok(ASSETS_RESPONSE),
        CannedResponse::ok(ASSETS_RESPONSE),
    ])
    .await;
    let client = client_for(&server);
    let creds = credentials();

    client.check_assets(&creds).await.unwrap();
    client.check_assets(&creds).await.unwrap();

    let requests = server.requests();
    let first: u64 = requests[0].header("ACCESS-NONCE").unwrap().parse().unwrap();
    let second: u64 = requests[1].header("ACCESS-NONCE").unwrap().parse().unwrap();
    assert!(second > first);
    assert_ne!(
        requests[0].header("ACCESS-SIGNATURE"),
        requests[1].header("ACCESS-SIGNATURE")
    );
}

#[tokio::test]
async fn test_api_failure_envelope_is_api_error() {
    let server = MockServer::start(vec![CannedResponse::ok(AUTH_FAILED_RESPONSE)]).await;
    let client = client_for(&server);

    let err = client.check_assets(&credentials()).await.unwrap_err();
    assert_eq!(err.api_code(), Some(20001));
    match err {
        RestError::Api { error, .. } => assert!(error.is_auth_failure()),
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_trade_history() {
    let server = MockServer::start(vec![CannedResponse::ok(TRADE_HISTORY_RESPONSE)]).await;
    let client = client_for(&server);
    let creds = credentials();

    let trades = client.get_trade_history(&creds, "btc").await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].trade_id, 9001);
    assert_eq!(trades[0].fee_amount_quote, dec!(12));
    assert_eq!(trades[0].executed_date().as_deref(), Some("2021-03-23"));

    let request = &server.requests()[0];
    assert_eq!(request.target, "/v1/user/spot/trade_history?pair=btc_jpy");
    let nonce = request.header("ACCESS-NONCE").unwrap();
    assert_eq!(
        request.header("ACCESS-SIGNATURE"),
        Some(creds.sign(nonce, "/v1/user/spot/trade_history?pair=btc_jpy").as_str())
    );
}

#[tokio::test]
async fn test_get_order_info() {
    let server = MockServer::start(vec![CannedResponse::ok(ORDER_RESPONSE)]).await;
    let client = client_for(&server);

    let order = client
        .get_order_info(&credentials(), "btc", "123")
        .await
        .unwrap();
    assert_eq!(order.order_id, 123);
    assert_eq!(order.status, OrderStatus::Unfilled);

    let request = &server.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/v1/user/spot/order?pair=btc_jpy&order_id=123");
}

// =============================================================================
// Trading Operations
// =============================================================================

#[tokio::test]
async fn test_make_trade_posts_signed_body() {
    let server = MockServer::start(vec![CannedResponse::ok(ORDER_RESPONSE)]).await;
    let client = client_for(&server);
    let creds = credentials();

    let order = client
        .make_trade(&creds, "btc", OrderSide::Buy, dec!(0.02))
        .await
        .unwrap();
    assert_eq!(order.order_id, 123);

    let request = &server.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/v1/user/spot/order");
    assert_eq!(
        request.body,
        r#"{"pair":"btc_jpy","amount":"0.0200","side":"buy","type":"market"}"#
    );

    let nonce = request.header("ACCESS-NONCE").unwrap();
    assert_eq!(
        request.header("ACCESS-SIGNATURE"),
        Some(creds.sign(nonce, &request.body).as_str())
    );
}

#[tokio::test]
async fn test_sell_to_jpy() {
    let server = MockServer::start(vec![CannedResponse::ok(ORDER_RESPONSE)]).await;
    let client = client_for(&server);

    client
        .sell_to_jpy(&credentials(), "eth", dec!(0.5))
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(
        request.body,
        r#"{"pair":"eth_jpy","amount":"0.5000","side":"sell","type":"market"}"#
    );
}

#[tokio::test]
async fn test_make_trade_rejects_zero_amount_without_request() {
    let server = MockServer::start(vec![]).await;
    let client = client_for(&server);

    let result = client
        .make_trade(&credentials(), "btc", OrderSide::Sell, dec!(0))
        .await;
    assert!(matches!(result, Err(RestError::RequestBuild(_))));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_buy_with_jpy_uses_buy_price() {
    let server = MockServer::start(vec![
        CannedResponse::ok(TICKER_RESPONSE),
        CannedResponse::ok(ORDER_RESPONSE),
    ])
    .await;
    let client = client_for(&server);

    let order = client
        .buy_with_jpy(&credentials(), "btc", 10_000)
        .await
        .unwrap();
    assert_eq!(order.side, OrderSide::Buy);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].target, "/btc_jpy/ticker");
    assert_eq!(requests[1].target, "/v1/user/spot/order");
    // 10000 / 500000 = 0.02
    assert_eq!(
        requests[1].body,
        r#"{"pair":"btc_jpy","amount":"0.0200","side":"buy","type":"market"}"#
    );
}

#[tokio::test]
async fn test_buy_with_jpy_propagates_price_failure() {
    let server = MockServer::start(vec![
        CannedResponse::status(500, BAD_GATEWAY_HTML),
        CannedResponse::ok(ORDER_RESPONSE),
    ])
    .await;
    let client = client_for(&server);

    let result = client.buy_with_jpy(&credentials(), "btc", 10_000).await;
    assert!(matches!(result, Err(RestError::Decode { status: 500, .. })));

    // No order was placed
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_buy_with_jpy_too_small_places_no_order() {
    let server = MockServer::start(vec![
        CannedResponse::ok(TICKER_RESPONSE),
        CannedResponse::ok(ORDER_RESPONSE),
    ])
    .await;
    let client = client_for(&server);

    // 1 / 500000 rounds to 0.0000
    let result = client.buy_with_jpy(&credentials(), "btc", 1).await;
    assert!(matches!(result, Err(RestError::RequestBuild(_))));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, "/btc_jpy/ticker");
}

#[tokio::test]
async fn test_one_client_serves_several_accounts() {
    let server = MockServer::start(vec![
        CannedResponse::ok(ASSETS_RESPONSE),
        CannedResponse::ok(ASSETS_RESPONSE),
    ])
    .await;
    let client = client_for(&server);
    let first = credentials();
    let second = Credentials::new("other_key", "other_secret").unwrap();

    client.check_assets(&first).await.unwrap();
    client.check_assets(&second).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].header("ACCESS-KEY"), Some(API_KEY));
    assert_eq!(requests[1].header("ACCESS-KEY"), Some("other_key"));
}
