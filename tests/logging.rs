//! File logging as the binary sets it up. Runs in its own process, so the
//! global subscriber can be installed once here.

use std::fs;
use tempfile::TempDir;
use testnet_order_bot::telemetry::init_logging;

#[test]
fn test_log_file_keeps_earlier_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("bot.log");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "earlier run\n").unwrap();

    std::env::set_var("RUST_LOG", "info");
    let guard = init_logging(&path).unwrap();
    tracing::info!("Market order placed: 4242");
    // Dropping the guard flushes the background writer
    drop(guard);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("earlier run\n"));
    assert!(contents.contains("Market order placed: 4242"));
    assert!(contents.ends_with('\n'));
}
