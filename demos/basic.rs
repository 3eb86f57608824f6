//! Basic example of using the `LedgerEngine`.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::LedgerEngine;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample commands as CSV
    let commands = r"op,account,to,owner,kind,amount,description
create,,,John Doe,savings,1000,
create,,,Jane Roe,current,1000,
deposit,1,,,,500,Salary
withdraw,2,,,,200,
transfer,1,2,,,300,
withdraw,2,,,,10000,
deactivate,2,,,,,
deposit,2,,,,50,
";

    // Create engine and process commands
    let mut engine = LedgerEngine::new();
    engine
        .process_commands(Cursor::new(commands))
        .expect("Failed to process commands");

    // Export results to stdout
    println!("\n=== Final Account State ===");
    engine
        .export_accounts(std::io::stdout())
        .expect("Failed to export accounts");
}
