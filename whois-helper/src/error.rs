//! Error types for WHOIS queries.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by [`WhoisQueryAdapter::query`](crate::WhoisQueryAdapter::query).
///
/// A domain that is simply not registered is not an error; `query` returns
/// `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum WhoisError {
    /// The domain's TLD has no known WHOIS server. Retrying will not help.
    #[error("Unknown TLD: {0}")]
    UnknownTld(String),

    /// Any other upstream failure (network, parsing, library error).
    #[error("WHOIS lookup error: {0}")]
    LookupError(String),
}

impl WhoisError {
    /// Whether the caller may retry on its next poll cycle.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::LookupError(_))
    }
}

/// Result alias for WHOIS queries.
pub type WhoisResult<T> = std::result::Result<T, WhoisError>;

/// Failure reported by a [`WhoisLookup`](crate::WhoisLookup) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The lookup library's own failure. The message is used to classify it.
    #[error("lookup failed: {0}")]
    Failed(String),

    /// Anything else that went wrong while performing the lookup.
    #[error("{0}")]
    Other(String),
}
