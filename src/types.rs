use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::{BotError, Result};

/// Raw exchange response, passed through untouched.
pub type OrderResult = serde_json::Value;

// =============================================================================
// Enums
// =============================================================================

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Values accepted on the command line. Matched case-insensitively.
    pub const CHOICES: [&'static str; 2] = ["buy", "sell"];

    /// Normalize free text to a side, ignoring ASCII case.
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("buy") {
            Ok(Side::Buy)
        } else if value.eq_ignore_ascii_case("sell") {
            Ok(Side::Sell)
        } else {
            Err(BotError::validation(format!(
                "side must be BUY or SELL, got `{}`",
                value
            )))
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long a resting order stays active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Good-till-cancelled
    #[default]
    Gtc,
    /// Immediate-or-cancel
    Ioc,
    /// Fill-or-kill
    Fok,
    /// Good-till-crossing (post only)
    Gtx,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeInForce {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            "GTX" => Ok(TimeInForce::Gtx),
            _ => Err(BotError::validation(format!(
                "time in force must be one of GTC, IOC, FOK, GTX, got `{}`",
                s
            ))),
        }
    }
}

/// Order type, used for the wire `type` field and for log labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit,
    StopLimit,
}

impl OrderKind {
    pub fn wire_type(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopLimit => "STOP",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "Market"),
            OrderKind::Limit => write!(f, "Limit"),
            OrderKind::StopLimit => write!(f, "Stop-Limit"),
        }
    }
}

// =============================================================================
// Order request
// =============================================================================

/// A validated order, ready to be turned into wire params.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRequest {
    Market {
        symbol: String,
        quantity: Decimal,
        side: Side,
    },
    Limit {
        symbol: String,
        quantity: Decimal,
        price: Decimal,
        side: Side,
        time_in_force: TimeInForce,
    },
    StopLimit {
        symbol: String,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
        time_in_force: TimeInForce,
    },
}

impl OrderRequest {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderRequest::Market { .. } => OrderKind::Market,
            OrderRequest::Limit { .. } => OrderKind::Limit,
            OrderRequest::StopLimit { .. } => OrderKind::StopLimit,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            OrderRequest::Market { symbol, .. }
            | OrderRequest::Limit { symbol, .. }
            | OrderRequest::StopLimit { symbol, .. } => symbol,
        }
    }

    /// Build the exchange payload. Decimals go out as their exact text.
    pub fn to_params(&self) -> OrderParams {
        let mut params = OrderParams::default();
        params.push("symbol", self.symbol());

        match self {
            OrderRequest::Market { quantity, side, .. } => {
                params.push("side", side.as_str());
                params.push("type", self.kind().wire_type());
                params.push("quantity", quantity.to_string());
            }
            OrderRequest::Limit {
                quantity,
                price,
                side,
                time_in_force,
                ..
            } => {
                params.push("side", side.as_str());
                params.push("type", self.kind().wire_type());
                params.push("timeInForce", time_in_force.as_str());
                params.push("quantity", quantity.to_string());
                params.push("price", price.to_string());
            }
            OrderRequest::StopLimit {
                quantity,
                price,
                stop_price,
                side,
                time_in_force,
                ..
            } => {
                params.push("side", side.as_str());
                params.push("type", self.kind().wire_type());
                params.push("timeInForce", time_in_force.as_str());
                params.push("quantity", quantity.to_string());
                params.push("price", price.to_string());
                params.push("stopPrice", stop_price.to_string());
            }
        }

        params
    }
}

/// Ordered key/value payload for `POST /fapi/v1/order`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderParams {
    fields: Vec<(&'static str, String)>,
}

impl OrderParams {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
