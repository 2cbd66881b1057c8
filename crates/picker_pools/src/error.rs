//! Pool selector parse errors.

use thiserror::Error;

/// Error parsing a pool selector from its string spelling.
///
/// These only occur at the CLI boundary; once a selector exists it always
/// resolves to a valid table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Unknown alphabet name.
    #[error("unknown alphabet '{0}' (expected persian, english or greek)")]
    UnknownAlphabet(String),

    /// Unknown jurisdiction name.
    #[error("unknown jurisdiction '{0}' (expected iran or usa)")]
    UnknownJurisdiction(String),
}
