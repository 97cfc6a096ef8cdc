use async_trait::async_trait;

use crate::error::ExchangeFault;
use crate::types::{OrderParams, OrderResult};

/// Abstraction over the exchange's order entry.
///
/// `FuturesTestnetClient` implements this against the Binance testnet.
/// Tests substitute an in-memory stub.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit one order and return the exchange's response unchanged.
    async fn create_order(&self, params: &OrderParams) -> Result<OrderResult, ExchangeFault>;
}
