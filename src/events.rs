//! Observer for client and order events.
//!
//! The library never installs a global subscriber. Callers hand an
//! [`OrderEvents`] to the factory and submitter; [`TracingEvents`] forwards
//! to `tracing` and is what the binary uses.

use tracing::{error, info};

use crate::error::ExchangeFault;
use crate::types::{OrderKind, OrderResult};

pub trait OrderEvents: Send + Sync {
    /// An authenticated handle was created.
    fn client_ready(&self, endpoint: &str);

    /// The exchange accepted an order.
    fn order_placed(&self, kind: OrderKind, result: &OrderResult);

    /// The exchange rejected or failed to process an order.
    fn order_failed(&self, kind: OrderKind, fault: &ExchangeFault);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl OrderEvents for TracingEvents {
    fn client_ready(&self, endpoint: &str) {
        info!(endpoint, "Initialized Binance futures testnet client");
    }

    fn order_placed(&self, kind: OrderKind, result: &OrderResult) {
        info!("{} order placed: {}", kind, result);
    }

    fn order_failed(&self, kind: OrderKind, fault: &ExchangeFault) {
        error!("{} order error: {}", kind, fault);
    }
}
