//! Bank Demo CLI
//!
//! Runs the fixed three-transaction scenario and prints a ledger summary.
//! Takes no arguments.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_demo::{run_demo, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdout = io::stdout();
    let handle = stdout.lock();
    run_demo(handle)
}
