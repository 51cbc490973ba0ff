//! Test helpers: a mock lookup backend and canned raw records.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};

use crate::error::LookupFailure;
use crate::services::parse_whois_text;
use crate::traits::WhoisLookup;
use crate::types::{RawRecord, RawScalar};

enum MockResponse {
    Record(Option<RawRecord>),
    Failure(LookupFailure),
    Text(String),
}

// ===== MockLookup =====

pub struct MockLookup {
    response: MockResponse,
    calls: Mutex<Vec<String>>,
}

impl MockLookup {
    fn with_response(response: MockResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(record: RawRecord) -> Self {
        Self::with_response(MockResponse::Record(Some(record)))
    }

    pub fn empty() -> Self {
        Self::with_response(MockResponse::Record(None))
    }

    pub fn failing(failure: LookupFailure) -> Self {
        Self::with_response(MockResponse::Failure(failure))
    }

    /// Parses `text` as a WHOIS server response on every lookup.
    pub fn from_text(text: &str) -> Self {
        Self::with_response(MockResponse::Text(text.to_string()))
    }

    /// Domains looked up so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisLookup for MockLookup {
    async fn lookup(&self, domain: &str) -> Result<Option<RawRecord>, LookupFailure> {
        self.calls.lock().unwrap().push(domain.to_string());
        match &self.response {
            MockResponse::Record(record) => Ok(record.clone()),
            MockResponse::Failure(failure) => Err(failure.clone()),
            MockResponse::Text(text) => parse_whois_text(text).map(Some),
        }
    }
}

// ===== Fixtures =====

/// A typical lookup library result for `home-assistant.io`.
pub fn sample_record() -> RawRecord {
    let midnight = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    };
    let amsterdam = DateTime::parse_from_rfc3339("2022-01-01T00:00:00+01:00").unwrap();
    let naive_update = NaiveDate::from_ymd_opt(2023, 11, 20)
        .unwrap()
        .and_hms_milli_opt(6, 55, 46, 110)
        .unwrap();

    RawRecord::new()
        .with("domain_name", vec!["HOME-ASSISTANT.IO"])
        .with("admin", "Admin")
        .with("creation_date", midnight(2019, 1, 1))
        .with("dnssec", "signedDelegation")
        .with("expiration_date", midnight(2023, 1, 1))
        .with(
            "updated_date",
            vec![RawScalar::from(amsterdam), RawScalar::from(naive_update)],
        )
        .with("name_servers", vec!["NS1.example.COM", "ns2.EXAMPLE.com"])
        .with("registrant_name", "registrant@example.com")
        .with("registrar", "My Registrar")
        .with("status", "OK")
}
