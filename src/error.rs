//! Error types for the demo.

use thiserror::Error;

/// Result type alias for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur during a demo run.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Failed to write to the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A monetary amount literal failed to parse
    #[error("invalid amount: {0}")]
    Amount(#[from] rust_decimal::Error),
}
