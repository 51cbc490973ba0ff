//! Query adapter turning lookup backend results into [`Domain`] records.

mod backend;
mod fields;
mod parser;

pub use backend::WhoisRustLookup;
pub use parser::parse_whois_text;

use crate::config::LookupConfig;
use crate::error::{LookupFailure, WhoisError, WhoisResult};
use crate::traits::WhoisLookup;
use crate::types::Domain;

/// Lookup library messages meaning the TLD has no WHOIS server.
const UNKNOWN_TLD_MARKERS: [&str; 2] = [
    "No whois server is known for this kind of object",
    "This TLD has no whois server",
];

/// Lookup library message for unregistered domains.
///
/// Best effort: other WHOIS servers phrase "not registered" differently, and those
/// responses surface as [`WhoisError::LookupError`] or as a record of nulls.
pub(crate) const NOT_FOUND_MARKER: &str = "No match for";

/// How a lookup failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    UnknownTld,
    NotFound,
    Generic,
}

/// The only place lookup failures are matched on their message.
fn classify_failure(failure: &LookupFailure) -> FailureKind {
    match failure {
        LookupFailure::Failed(msg) if UNKNOWN_TLD_MARKERS.iter().any(|m| msg.contains(*m)) => {
            FailureKind::UnknownTld
        }
        LookupFailure::Failed(msg) if msg.contains(NOT_FOUND_MARKER) => FailureKind::NotFound,
        LookupFailure::Failed(_) | LookupFailure::Other(_) => FailureKind::Generic,
    }
}

/// Runs WHOIS queries through a lookup backend and normalizes the result.
///
/// Calls are independent; the adapter holds no state beyond the backend.
///
/// ```rust,no_run
/// use whois_helper::{LookupConfig, WhoisQueryAdapter};
/// # async fn demo() -> whois_helper::WhoisResult<()> {
/// let adapter = WhoisQueryAdapter::from_config(LookupConfig::default())?;
/// if let Some(domain) = adapter.query("home-assistant.io").await? {
///     println!("expires: {:?}", domain.expiration_date);
/// }
/// # Ok(())
/// # }
/// ```
pub struct WhoisQueryAdapter<L> {
    lookup: L,
}

impl WhoisQueryAdapter<WhoisRustLookup> {
    /// Adapter backed by [`WhoisRustLookup`].
    pub fn from_config(config: LookupConfig) -> WhoisResult<Self> {
        Ok(Self::new(WhoisRustLookup::new(config)?))
    }
}

impl<L: WhoisLookup> WhoisQueryAdapter<L> {
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    #[cfg(test)]
    pub(crate) const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Query WHOIS information for a domain.
    ///
    /// The domain is passed to the backend as given.
    ///
    /// # Returns
    /// * `Ok(Some(domain))` - normalized registration data
    /// * `Ok(None)` - nothing found (unregistered domain or empty result)
    /// * `Err(WhoisError::UnknownTld)` - the TLD cannot be queried; do not retry
    /// * `Err(WhoisError::LookupError)` - any other failure; may be retried
    pub async fn query(&self, domain: &str) -> WhoisResult<Option<Domain>> {
        log::debug!("Querying WHOIS for {domain}");

        let raw = match self.lookup.lookup(domain).await {
            Ok(raw) => raw,
            Err(failure) => match classify_failure(&failure) {
                FailureKind::UnknownTld => {
                    log::warn!("No WHOIS server for {domain}: {failure}");
                    return Err(WhoisError::UnknownTld(domain.to_string()));
                }
                FailureKind::NotFound => {
                    log::debug!("No WHOIS match for {domain}");
                    None
                }
                FailureKind::Generic => {
                    log::warn!("WHOIS lookup for {domain} failed: {failure}");
                    return Err(WhoisError::LookupError(failure.to_string()));
                }
            },
        };

        Ok(raw.as_ref().map(Domain::from_raw))
    }
}
