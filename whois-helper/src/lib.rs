//! WHOIS lookup normalization.
//!
//! Runs a WHOIS lookup through a pluggable backend and reshapes whatever the
//! backend returns (missing fields, bare values or lists, mixed-case data) into a
//! stable [`Domain`] record. Failures are reduced to two kinds: [`WhoisError::UnknownTld`]
//! and [`WhoisError::LookupError`]; an unregistered domain is `Ok(None)`.

mod config;
mod error;
mod services;
mod traits;
mod types;

#[cfg(test)]
mod test_utils;

pub use config::LookupConfig;
pub use error::{LookupFailure, WhoisError, WhoisResult};
pub use services::{parse_whois_text, WhoisQueryAdapter, WhoisRustLookup};
pub use traits::WhoisLookup;
pub use types::{Domain, RawField, RawRecord, RawScalar, Timestamp};
