use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use url::Url;

use crate::error::{BotError, Result};

pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";
pub const BASE_URL_VAR: &str = "BINANCE_FUTURES_URL";
pub const RECV_WINDOW_VAR: &str = "BINANCE_RECV_WINDOW";

/// USDⓈ-M Futures testnet REST root.
pub const TESTNET_FUTURES_URL: &str = "https://testnet.binancefuture.com";

/// Domain of the live exchange. Every host under it trades real funds.
const PRODUCTION_DOMAIN: &str = "binance.com";

const MAX_RECV_WINDOW_MS: u64 = 60_000;

/// API key pair for `SIGNED` endpoints.
pub struct Credentials {
    api_key: SecretString,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(BotError::config("API key and secret must both be non-empty"));
        }
        Ok(Self {
            api_key: SecretString::from(api_key),
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Read the key pair through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).filter(|v| !v.is_empty());
        let api_secret = lookup(API_SECRET_VAR).filter(|v| !v.is_empty());

        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Self::new(key, secret),
            (key, secret) => {
                let missing: Vec<&str> = [
                    key.is_none().then_some(API_KEY_VAR),
                    secret.is_none().then_some(API_SECRET_VAR),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(BotError::config(format!(
                    "API credentials not set in environment variables (missing {})",
                    missing.join(", ")
                )))
            }
        }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub(crate) fn api_secret(&self) -> &SecretString {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Endpoint settings for the testnet client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST root, e.g. `https://testnet.binancefuture.com`
    pub base_url: Url,
    /// Optional `recvWindow` in milliseconds
    pub recv_window: Option<u64>,
}

impl ClientConfig {
    /// Endpoint paths are resolved relative to `base_url`, so a path prefix
    /// such as `http://127.0.0.1:8080/stub` is kept.
    pub fn new(base_url: &str, recv_window: Option<u64>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| BotError::config(format!("invalid base URL `{}`: {}", base_url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let config = Self {
            base_url,
            recv_window,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read overrides through a variable lookup, falling back to the testnet.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| TESTNET_FUTURES_URL.to_string());

        let recv_window = match lookup(RECV_WINDOW_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                BotError::config(format!("{} must be an integer: {}", RECV_WINDOW_VAR, e))
            })?),
            None => None,
        };

        Self::new(base_url.trim(), recv_window)
    }

    fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BotError::config(format!(
                    "base URL must use http or https, got `{}`",
                    other
                )))
            }
        }

        let host = self
            .base_url
            .host_str()
            .ok_or_else(|| BotError::config("base URL has no host"))?;
        if is_production_host(host) {
            return Err(BotError::config(format!(
                "refusing to target production host `{}`; only the testnet is supported",
                host
            )));
        }

        if let Some(window) = self.recv_window {
            if window == 0 || window > MAX_RECV_WINDOW_MS {
                return Err(BotError::config(format!(
                    "{} must be between 1 and {} ms, got {}",
                    RECV_WINDOW_VAR, MAX_RECV_WINDOW_MS, window
                )));
            }
        }

        Ok(())
    }
}

/// Case-insensitive, and a fully qualified `fapi.binance.com.` still counts.
fn is_production_host(host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    host == PRODUCTION_DOMAIN
        || host
            .strip_suffix(PRODUCTION_DOMAIN)
            .is_some_and(|sub| sub.ends_with('.'))
}
