//! REST transport for signed futures testnet endpoints.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Credentials;
use crate::error::ExchangeFault;
use crate::signing::{signed_body, timestamp_ms};
use crate::types::{OrderParams, OrderResult};

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Longest slice of a non-JSON body kept in an error.
const MAX_BODY_CHARS: usize = 256;

/// Error body returned by Binance on rejected requests
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// REST client for `SIGNED` testnet endpoints
pub struct RestClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
    recv_window: Option<u64>,
}

impl RestClient {
    pub fn new(base_url: Url, credentials: Credentials, recv_window: Option<u64>) -> Self {
        Self::with_client(base_url, credentials, recv_window, Client::new())
    }

    /// Create a REST client with a custom reqwest client
    pub fn with_client(
        base_url: Url,
        credentials: Credentials,
        recv_window: Option<u64>,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url,
            credentials,
            recv_window,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST a signed form body to `path` and return the JSON response.
    ///
    /// `path` is joined onto the base URL, so it must not start with `/`.
    pub async fn post_signed(
        &self,
        path: &str,
        params: &OrderParams,
    ) -> Result<OrderResult, ExchangeFault> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ExchangeFault::Transport(format!("invalid path `{}`: {}", path, e)))?;

        let body = signed_body(
            params,
            self.recv_window,
            timestamp_ms()?,
            self.credentials.api_secret(),
        )?;

        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(decode_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|_| ExchangeFault::InvalidResponse {
            status: status.as_u16(),
            body: condense_body(&text),
        })
    }
}

/// Collapse a raw body onto one line and cap its length.
fn condense_body(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}

fn decode_error(status: StatusCode, body: &str) -> ExchangeFault {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => ExchangeFault::Api {
            status: status.as_u16(),
            code: err.code,
            message: err.msg,
        },
        Err(_) => ExchangeFault::InvalidResponse {
            status: status.as_u16(),
            body: condense_body(body),
        },
    }
}
