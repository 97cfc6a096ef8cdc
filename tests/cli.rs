//! Command-line scenarios: parse, submit, print, exit code.

use clap::Parser;
use httpmock::prelude::*;
use serde_json::json;
use testnet_order_bot::cli::{self, Cli};
use testnet_order_bot::{
    create_handle_from, TracingEvents, API_KEY_VAR, API_SECRET_VAR, BASE_URL_VAR,
};

struct Outcome {
    code: u8,
    stdout: String,
    stderr: String,
}

async fn invoke<F>(args: &[&str], env: F) -> Outcome
where
    F: Fn(&str) -> Option<String>,
{
    let parsed = Cli::try_parse_from(args.iter().copied()).unwrap();
    let events = TracingEvents;
    let outcome = cli::run(
        &parsed.command,
        || create_handle_from(env, &events),
        &events,
    )
    .await;

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = cli::report(&outcome, &mut out, &mut err).unwrap();

    Outcome {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn env_for(base_url: String) -> impl Fn(&str) -> Option<String> {
    move |name: &str| match name {
        API_KEY_VAR => Some("cli-key".to_string()),
        API_SECRET_VAR => Some("cli-secret".to_string()),
        BASE_URL_VAR => Some(base_url.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_market_success_prints_result_and_exits_zero() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/fapi/v1/order")
                .header("x-mbx-apikey", "cli-key")
                .body_includes("symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01");
            then.status(200)
                .json_body(json!({"orderId": 11, "status": "NEW"}));
        })
        .await;

    let outcome = invoke(
        &["testnet-order-bot", "market", "BTCUSDT", "0.01", "buy"],
        env_for(server.base_url()),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(outcome.code, 0);
    assert!(outcome.stdout.starts_with("Order placed successfully:\n"));
    assert!(outcome.stdout.contains("\"orderId\":11"));
    assert!(outcome.stderr.is_empty());
}

#[tokio::test]
async fn test_market_failure_prints_error_and_exits_one() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/fapi/v1/order");
            then.status(400)
                .json_body(json!({"code": -1121, "msg": "Invalid symbol."}));
        })
        .await;

    let outcome = invoke(
        &["testnet-order-bot", "market", "BTCUSDT", "0.01", "buy"],
        env_for(server.base_url()),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(outcome.code, 1);
    assert!(outcome.stdout.is_empty());
    assert_eq!(
        outcome.stderr,
        "Error: Binance API error: APIError(code=-1121): Invalid symbol.\n"
    );
}

#[tokio::test]
async fn test_html_error_page_prints_single_error_line() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/fapi/v1/order");
            then.status(502)
                .body("<html>\n<body>Bad Gateway</body>\n</html>\n");
        })
        .await;

    let outcome = invoke(
        &["testnet-order-bot", "market", "BTCUSDT", "0.01", "buy"],
        env_for(server.base_url()),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stderr.lines().count(), 1);
    assert_eq!(
        outcome.stderr,
        "Error: Binance API error: Invalid response (HTTP 502): \
         <html> <body>Bad Gateway</body> </html>\n"
    );
}

#[tokio::test]
async fn test_limit_and_stop_commands_reach_exchange() {
    let server = MockServer::start_async().await;
    let limit = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/fapi/v1/order")
                .body_includes("type=LIMIT&timeInForce=GTX");
            then.status(200).json_body(json!({"orderId": 21}));
        })
        .await;
    let stop = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/fapi/v1/order")
                .body_includes("type=STOP&timeInForce=GTC")
                .body_includes("stopPrice=49000.5");
            then.status(200).json_body(json!({"orderId": 22}));
        })
        .await;

    let limit_outcome = invoke(
        &[
            "testnet-order-bot",
            "limit",
            "BTCUSDT",
            "0.01",
            "50000",
            "sell",
            "--time-in-force",
            "gtx",
        ],
        env_for(server.base_url()),
    )
    .await;
    let stop_outcome = invoke(
        &[
            "testnet-order-bot",
            "stop",
            "BTCUSDT",
            "0.01",
            "49000",
            "49000.5",
            "SELL",
        ],
        env_for(server.base_url()),
    )
    .await;

    limit.assert_async().await;
    stop.assert_async().await;
    assert_eq!(limit_outcome.code, 0);
    assert!(limit_outcome.stdout.contains("\"orderId\":21"));
    assert_eq!(stop_outcome.code, 0);
    assert!(stop_outcome.stdout.contains("\"orderId\":22"));
}

#[tokio::test]
async fn test_missing_credentials_exits_one() {
    let outcome = invoke(
        &["testnet-order-bot", "market", "BTCUSDT", "0.01", "sell"],
        |_: &str| None,
    )
    .await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stdout.is_empty());
    assert!(outcome
        .stderr
        .starts_with("Error: Configuration error: API credentials not set"));
}
