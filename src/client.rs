//! Binance futures testnet handle and the factory that builds it.

use async_trait::async_trait;

use crate::config::{ClientConfig, Credentials};
use crate::error::{ExchangeFault, Result};
use crate::events::OrderEvents;
use crate::gateway::OrderGateway;
use crate::rpc::RestClient;
use crate::types::{OrderParams, OrderResult};

/// Relative to the configured base URL.
const ORDER_PATH: &str = "fapi/v1/order";

/// Authenticated handle bound to the futures testnet.
///
/// Building one performs no network activity; the only request it ever
/// makes is the order submission itself.
pub struct FuturesTestnetClient {
    rest: RestClient,
}

impl FuturesTestnetClient {
    pub fn new(credentials: Credentials, config: ClientConfig) -> Self {
        Self {
            rest: RestClient::new(config.base_url, credentials, config.recv_window),
        }
    }

    /// REST root this handle talks to.
    pub fn endpoint(&self) -> &str {
        self.rest.base_url().as_str()
    }
}

#[async_trait]
impl OrderGateway for FuturesTestnetClient {
    async fn create_order(
        &self,
        params: &OrderParams,
    ) -> std::result::Result<OrderResult, ExchangeFault> {
        self.rest.post_signed(ORDER_PATH, params).await
    }
}

/// Create a testnet handle from the process environment.
///
/// Expects `BINANCE_API_KEY` and `BINANCE_API_SECRET`.
pub fn create_handle(events: &dyn OrderEvents) -> Result<FuturesTestnetClient> {
    create_handle_from(|name| std::env::var(name).ok(), events)
}

/// Create a testnet handle, resolving variables through `lookup`.
pub fn create_handle_from<F>(lookup: F, events: &dyn OrderEvents) -> Result<FuturesTestnetClient>
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::from_lookup(&lookup)?;
    let config = ClientConfig::from_lookup(&lookup)?;

    let client = FuturesTestnetClient::new(credentials, config);
    events.client_ready(client.endpoint());

    Ok(client)
}
