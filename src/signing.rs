//! Request signing for Binance `SIGNED` endpoints.
//!
//! The signature is the lowercase hex HMAC-SHA256 of the exact URL-encoded
//! body text, keyed by the API secret, appended as the final `signature`
//! parameter.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use url::form_urlencoded;

use crate::error::ExchangeFault;
use crate::types::OrderParams;

type HmacSha256 = Hmac<Sha256>;

/// Sign a query/body string with the API secret.
pub fn sign_query(secret: &SecretString, query: &str) -> Result<String, ExchangeFault> {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|e| ExchangeFault::Signing(format!("invalid HMAC key: {}", e)))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Build the signed form body for an order.
///
/// Layout: `<params>[&recvWindow=..]&timestamp=..&signature=..`
pub fn signed_body(
    params: &OrderParams,
    recv_window: Option<u64>,
    timestamp_ms: u64,
    secret: &SecretString,
) -> Result<String, ExchangeFault> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(params.iter());
    if let Some(window) = recv_window {
        serializer.append_pair("recvWindow", &window.to_string());
    }
    serializer.append_pair("timestamp", &timestamp_ms.to_string());
    let query = serializer.finish();

    let signature = sign_query(secret, &query)?;
    tracing::debug!("Signed order body: {}", query);

    Ok(format!("{}&signature={}", query, signature))
}

/// Current Unix time in milliseconds.
pub fn timestamp_ms() -> Result<u64, ExchangeFault> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ExchangeFault::Signing(e.to_string()))?;
    Ok(elapsed.as_millis() as u64)
}
