//! CLI command implementations.
//!
//! Each submodule implements one generation panel.

pub mod color;
pub mod country;
pub mod dice;
pub mod letter;
pub mod name;
pub mod number;
pub mod region;

use crate::{CliError, Result};

/// Checks the `--format` argument before any work happens.
pub(crate) fn check_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" => Ok(()),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: table, json",
            other
        ))),
    }
}
