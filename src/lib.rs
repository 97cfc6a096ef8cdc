//! # Testnet Order Bot
//!
//! Submits market, limit and stop-limit orders to the Binance USDⓈ-M Futures
//! testnet and reports the exchange's answer.
//!
//! ## Features
//!
//! - Credentials read from `BINANCE_API_KEY` / `BINANCE_API_SECRET`
//! - Handles that can only ever target the testnet
//! - Case-insensitive side validation before anything is sent
//! - Prices and quantities carried as exact decimals
//! - One error type with three kinds: configuration, validation, exchange
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use testnet_order_bot::{create_handle, OrderSubmitter, TimeInForce, TracingEvents};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let events = TracingEvents;
//!     let client = create_handle(&events)?;
//!     let submitter = OrderSubmitter::new(&client, &events);
//!
//!     let quantity: Decimal = "0.01".parse()?;
//!     let price: Decimal = "50000.5".parse()?;
//!     let order = submitter
//!         .submit_limit_order("BTCUSDT", quantity, price, "buy", TimeInForce::Gtc)
//!         .await?;
//!     println!("Order placed: {}", order);
//!
//!     Ok(())
//! }
//! ```

// Internal modules
mod client;
mod config;
mod error;
mod events;
mod gateway;
mod orders;
mod rpc;
mod signing;
mod types;

pub mod cli;
pub mod telemetry;

// Re-export public API
pub use client::{create_handle, create_handle_from, FuturesTestnetClient};
pub use config::{
    ClientConfig, Credentials, API_KEY_VAR, API_SECRET_VAR, BASE_URL_VAR, RECV_WINDOW_VAR,
    TESTNET_FUTURES_URL,
};
pub use error::{BotError, ExchangeFault, Result};
pub use events::{OrderEvents, TracingEvents};
pub use gateway::OrderGateway;
pub use orders::OrderSubmitter;
pub use types::{
    // Enums
    OrderKind,
    Side,
    TimeInForce,
    // Order types
    OrderParams,
    OrderRequest,
    OrderResult,
};
