//! Order submission.
//!
//! Each call validates the side locally, builds the payload, forwards it to
//! the gateway exactly once and folds any exchange fault into
//! [`BotError::Exchange`]. Nothing is retried, so a failed call can never
//! produce a duplicate order.

use rust_decimal::Decimal;

use crate::error::{BotError, Result};
use crate::events::OrderEvents;
use crate::gateway::OrderGateway;
use crate::types::{OrderRequest, OrderResult, Side, TimeInForce};

pub struct OrderSubmitter<'a, G: ?Sized> {
    gateway: &'a G,
    events: &'a dyn OrderEvents,
}

impl<'a, G> OrderSubmitter<'a, G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(gateway: &'a G, events: &'a dyn OrderEvents) -> Self {
        Self { gateway, events }
    }

    /// Place a market order.
    /// `side` must be "buy" or "sell" in any case.
    pub async fn submit_market_order(
        &self,
        symbol: &str,
        quantity: Decimal,
        side: &str,
    ) -> Result<OrderResult> {
        let order = OrderRequest::Market {
            symbol: symbol.to_string(),
            quantity,
            side: Side::parse(side)?,
        };
        self.submit(&order).await
    }

    /// Place a limit order.
    pub async fn submit_limit_order(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
        side: &str,
        time_in_force: TimeInForce,
    ) -> Result<OrderResult> {
        let order = OrderRequest::Limit {
            symbol: symbol.to_string(),
            quantity,
            price,
            side: Side::parse(side)?,
            time_in_force,
        };
        self.submit(&order).await
    }

    /// Place a stop-limit order: a limit at `price` armed once `stop_price` trades.
    pub async fn submit_stop_limit_order(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: &str,
        time_in_force: TimeInForce,
    ) -> Result<OrderResult> {
        let order = OrderRequest::StopLimit {
            symbol: symbol.to_string(),
            quantity,
            price,
            stop_price,
            side: Side::parse(side)?,
            time_in_force,
        };
        self.submit(&order).await
    }

    /// Forward an already-validated order.
    pub async fn submit(&self, order: &OrderRequest) -> Result<OrderResult> {
        let kind = order.kind();
        let params = order.to_params();

        match self.gateway.create_order(&params).await {
            Ok(result) => {
                self.events.order_placed(kind, &result);
                Ok(result)
            }
            Err(fault) => {
                self.events.order_failed(kind, &fault);
                Err(BotError::from(fault))
            }
        }
    }
}
