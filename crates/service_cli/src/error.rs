//! CLI error types.

use picker_core::types::ValidationError;
use picker_pools::PoolError;
use thiserror::Error;

/// Errors surfaced by the randpick CLI.
///
/// Validation failures carry the exact user-facing Persian message from the
/// engine; everything else is operator-facing plumbing.
#[derive(Error, Debug)]
pub enum CliError {
    /// A generation request failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A pool selector did not parse.
    #[error("{0}")]
    Pool(#[from] PoolError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Report serialisation failed.
    #[error("Output serialisation failed: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;
