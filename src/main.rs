//! Testnet Order Bot - entry point

use clap::Parser;
use std::io;
use std::process::ExitCode;

use testnet_order_bot::cli::{self, Cli};
use testnet_order_bot::{create_handle, telemetry, TracingEvents};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = match telemetry::init_logging(&cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let events = TracingEvents;
    let outcome = cli::run(&cli.command, || create_handle(&events), &events).await;

    match cli::report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
