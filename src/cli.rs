//! Command-line surface: argument model, dispatch and output.

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::events::OrderEvents;
use crate::gateway::OrderGateway;
use crate::orders::OrderSubmitter;
use crate::types::{OrderResult, Side, TimeInForce};

/// Binance Futures Testnet trading bot
#[derive(Parser, Debug)]
#[command(name = "testnet-order-bot", version, about, long_about = None)]
pub struct Cli {
    /// File that log records are appended to
    #[arg(long, global = true, env = "BOT_LOG_FILE", default_value = "bot.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Place a market order
    Market {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
        /// Order quantity
        #[arg(allow_negative_numbers = true)]
        quantity: Decimal,
        /// Buy or sell
        #[arg(value_parser = PossibleValuesParser::new(Side::CHOICES), ignore_case = true)]
        side: String,
    },

    /// Place a limit order
    Limit {
        symbol: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Decimal,
        /// Limit price
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
        #[arg(value_parser = PossibleValuesParser::new(Side::CHOICES), ignore_case = true)]
        side: String,
        /// GTC, IOC, FOK or GTX
        #[arg(long, default_value_t = TimeInForce::Gtc)]
        time_in_force: TimeInForce,
    },

    /// Place a stop-limit order
    Stop {
        symbol: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Decimal,
        /// Limit price
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
        /// Trigger price
        #[arg(allow_negative_numbers = true)]
        stop_price: Decimal,
        #[arg(value_parser = PossibleValuesParser::new(Side::CHOICES), ignore_case = true)]
        side: String,
        #[arg(long, default_value_t = TimeInForce::Gtc)]
        time_in_force: TimeInForce,
    },
}

/// Build a handle with `connect`, then submit the order `command` describes.
pub async fn run<G, F>(
    command: &Command,
    connect: F,
    events: &dyn OrderEvents,
) -> Result<OrderResult>
where
    G: OrderGateway,
    F: FnOnce() -> Result<G>,
{
    let gateway = connect()?;
    let submitter = OrderSubmitter::new(&gateway, events);

    match command {
        Command::Market {
            symbol,
            quantity,
            side,
        } => submitter.submit_market_order(symbol, *quantity, side).await,
        Command::Limit {
            symbol,
            quantity,
            price,
            side,
            time_in_force,
        } => {
            submitter
                .submit_limit_order(symbol, *quantity, *price, side, *time_in_force)
                .await
        }
        Command::Stop {
            symbol,
            quantity,
            price,
            stop_price,
            side,
            time_in_force,
        } => {
            submitter
                .submit_stop_limit_order(
                    symbol,
                    *quantity,
                    *price,
                    *stop_price,
                    side,
                    *time_in_force,
                )
                .await
        }
    }
}

/// Print the outcome and return the process exit code.
pub fn report<O, E>(outcome: &Result<OrderResult>, out: &mut O, err: &mut E) -> io::Result<u8>
where
    O: Write,
    E: Write,
{
    match outcome {
        Ok(order) => {
            writeln!(out, "Order placed successfully:")?;
            writeln!(out, "{}", order)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "Error: {}", single_line(&e.to_string()))?;
            Ok(1)
        }
    }
}

fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
