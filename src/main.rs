//! payboard binary - seeds the ledger and runs the interactive console.

use payboard::{
    config,
    console::Console,
    core::PaymentLedger,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    // Logs go to stderr so the board on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the seed records (file from PAYBOARD_CONFIG, or built-ins)
    let (seed_path, explicit) = config::resolve_seed_path();
    let records = config::seeds::load_initial_records(&seed_path, explicit)
        .inspect_err(|e| error!("Failed to load seed records: {e}"))?;

    // 4. Build the ledger owned by the console session
    let ledger = PaymentLedger::with_records(records);
    info!("Ledger seeded with {} record(s).", ledger.len());

    // 5. Run the console over stdin/stdout
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(ledger, stdin.lock(), stdout.lock());
    console
        .run()
        .inspect_err(|e| error!("Console session failed: {e}"))?;

    info!("Session ended, ledger state discarded.");
    Ok(())
}
