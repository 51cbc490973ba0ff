//! WHOIS lookup backend built on `whois-rust`.

use async_trait::async_trait;
use whois_rust::{WhoIs, WhoIsLookupOptions};

use super::parser::parse_whois_text;
use crate::config::LookupConfig;
use crate::error::{LookupFailure, WhoisError, WhoisResult};
use crate::traits::WhoisLookup;
use crate::types::RawRecord;

/// Embedded WHOIS server mapping (TLD → server).
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

/// Queries WHOIS servers directly and parses their text responses.
pub struct WhoisRustLookup {
    client: WhoIs,
    config: LookupConfig,
}

impl WhoisRustLookup {
    /// Build a backend from `config`, using the embedded server map unless it supplies one.
    pub fn new(config: LookupConfig) -> WhoisResult<Self> {
        let servers = config.servers.as_deref().unwrap_or(WHOIS_SERVERS);
        let client = WhoIs::from_string(servers).map_err(|e| {
            WhoisError::LookupError(format!("Failed to initialize WHOIS client: {e}"))
        })?;
        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    fn options(&self, domain: &str) -> Result<WhoIsLookupOptions, LookupFailure> {
        let mut options = WhoIsLookupOptions::from_string(domain)
            .map_err(|e| LookupFailure::Other(format!("Invalid domain: {e}")))?;
        options.follow = self.config.follow;
        options.timeout = Some(self.config.timeout());
        Ok(options)
    }
}

#[async_trait]
impl WhoisLookup for WhoisRustLookup {
    async fn lookup(&self, domain: &str) -> Result<Option<RawRecord>, LookupFailure> {
        let options = self.options(domain)?;
        let raw = self
            .client
            .lookup_async(options)
            .await
            .map_err(|e| LookupFailure::Failed(e.to_string()))?;
        log::trace!("WHOIS response for {domain}: {} bytes", raw.len());

        parse_whois_text(&raw).map(Some)
    }
}
