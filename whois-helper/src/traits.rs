//! Lookup backend abstraction.

use async_trait::async_trait;

use crate::error::LookupFailure;
use crate::types::RawRecord;

/// A WHOIS lookup backend.
///
/// Implementations:
/// - [`WhoisRustLookup`](crate::WhoisRustLookup): queries WHOIS servers over TCP via `whois-rust`
/// - tests: in-memory mocks returning canned records or failures
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Look up a domain.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - raw registration data keyed by field name
    /// * `Ok(None)` - the backend returned nothing
    /// * `Err(failure)` - the lookup failed; the adapter classifies it
    async fn lookup(&self, domain: &str) -> Result<Option<RawRecord>, LookupFailure>;
}
