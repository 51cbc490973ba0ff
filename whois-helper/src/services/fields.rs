//! Field extraction from raw lookup results.
//!
//! Every helper here is total: a missing field, an unexpected value type or a
//! list where a single value was expected degrades to `None` instead of failing.

use crate::types::{Domain, RawRecord, RawScalar, Timestamp};

/// Fields tried, in order, for the owner and registrant.
const OWNER_FIELDS: [&str; 3] = ["name", "org", "registrant_name"];

const DNSSEC_UNSIGNED: &str = "unsigned";

impl Domain {
    /// Map a raw lookup result onto the normalized record.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let owner = owner(raw);
        Self {
            admin: single_string(raw, "admin"),
            creation_date: date(raw, "creation_date"),
            dnssec: dnssec(raw),
            expiration_date: date(raw, "expiration_date"),
            last_updated: date(raw, "updated_date"),
            name_servers: name_servers(raw),
            registrant: owner.clone(),
            owner,
            registrar: single_string(raw, "registrar"),
            reseller: None,
            status: single_string(raw, "status"),
            statuses: statuses(raw),
        }
    }
}

/// The bare value, or the first element of a list.
fn single<'a>(raw: &'a RawRecord, name: &str) -> Option<&'a RawScalar> {
    raw.field(name)?.first()
}

fn single_string(raw: &RawRecord, name: &str) -> Option<String> {
    single(raw, name).map(ToString::to_string)
}

/// Some lookup libraries hand back the unparsed text when a date does not parse.
fn date(raw: &RawRecord, name: &str) -> Option<Timestamp> {
    let value = single(raw, name)?;
    let ts = value.as_timestamp();
    if ts.is_none() {
        log::trace!("Discarding non-date value for {name}: {value}");
    }
    ts
}

fn name_servers(raw: &RawRecord) -> Option<Vec<String>> {
    let field = raw.field("name_servers")?;
    Some(
        field
            .values()
            .iter()
            .map(|ns| ns.to_string().to_lowercase())
            .collect(),
    )
}

fn owner(raw: &RawRecord) -> Option<String> {
    OWNER_FIELDS
        .iter()
        .filter_map(|name| single(raw, name))
        .find(|value| !value.is_empty())
        .map(ToString::to_string)
        .filter(|owner| !owner.is_empty())
}

/// Signed if any returned token is something other than "unsigned".
fn dnssec(raw: &RawRecord) -> bool {
    raw.field("dnssec").is_some_and(|field| {
        field
            .values()
            .iter()
            .any(|v| !v.to_string().eq_ignore_ascii_case(DNSSEC_UNSIGNED))
    })
}

fn statuses(raw: &RawRecord) -> Option<Vec<String>> {
    let field = raw.field("status")?;
    Some(field.values().iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    fn naive(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn record(name: &str, value: impl Into<crate::types::RawField>) -> RawRecord {
        RawRecord::new().with(name, value)
    }

    // ==================== single-value tests ====================

    #[test]
    fn test_single_absent_and_empty() {
        assert!(single(&RawRecord::new(), "registrar").is_none());
        assert!(single(&record("registrar", ""), "registrar").is_none());
        assert!(single(&record("registrar", Vec::<String>::new()), "registrar").is_none());
    }

    #[test]
    fn test_single_list_equals_scalar() {
        let scalar = record("registrar", "My Registrar");
        let list = record("registrar", vec!["My Registrar"]);
        assert_eq!(
            single_string(&scalar, "registrar"),
            single_string(&list, "registrar")
        );
    }

    #[test]
    fn test_single_takes_first_of_list() {
        let raw = record("registrar", vec!["First", "Second"]);
        assert_eq!(single_string(&raw, "registrar").as_deref(), Some("First"));
    }

    // ==================== date tests ====================

    #[test]
    fn test_date_scalar() {
        let raw = record("creation_date", naive(2019, 1, 1));
        assert_eq!(
            date(&raw, "creation_date"),
            Some(Timestamp::Naive(naive(2019, 1, 1)))
        );
    }

    #[test]
    fn test_date_first_of_list() {
        let zoned = DateTime::parse_from_rfc3339("2022-01-01T00:00:00+01:00").unwrap();
        let raw = record(
            "updated_date",
            vec![RawScalar::from(zoned), RawScalar::from(naive(2023, 11, 20))],
        );
        assert_eq!(date(&raw, "updated_date"), Some(Timestamp::Zoned(zoned)));
    }

    #[test]
    fn test_date_text_is_discarded() {
        let raw = record("expiration_date", "2023-01-01");
        assert!(date(&raw, "expiration_date").is_none());
    }

    // ==================== name server tests ====================

    #[test]
    fn test_name_servers_lowercased_in_order() {
        let raw = record("name_servers", vec!["NS1.EXAMPLE.com", "ns2.example.COM"]);
        assert_eq!(
            name_servers(&raw),
            Some(vec![
                "ns1.example.com".to_string(),
                "ns2.example.com".to_string()
            ])
        );
    }

    #[test]
    fn test_name_servers_scalar_is_wrapped() {
        let raw = record("name_servers", "NS1.EXAMPLE.COM");
        assert_eq!(name_servers(&raw), Some(vec!["ns1.example.com".to_string()]));
    }

    #[test]
    fn test_name_servers_absent() {
        assert!(name_servers(&RawRecord::new()).is_none());
        assert!(name_servers(&record("name_servers", Vec::<String>::new())).is_none());
    }

    // ==================== owner tests ====================

    #[test]
    fn test_owner_priority() {
        let raw = RawRecord::new()
            .with("registrant_name", "registrant@example.com")
            .with("org", "Example Org")
            .with("name", "Jane Doe");
        assert_eq!(owner(&raw).as_deref(), Some("Jane Doe"));

        let raw = RawRecord::new()
            .with("registrant_name", "registrant@example.com")
            .with("org", "Example Org");
        assert_eq!(owner(&raw).as_deref(), Some("Example Org"));

        let raw = record("registrant_name", "registrant@example.com");
        assert_eq!(owner(&raw).as_deref(), Some("registrant@example.com"));
    }

    #[test]
    fn test_owner_skips_empty_candidates() {
        let raw = RawRecord::new()
            .with("name", vec![""])
            .with("org", "Example Org");
        assert_eq!(owner(&raw).as_deref(), Some("Example Org"));
    }

    #[test]
    fn test_owner_absent() {
        assert!(owner(&RawRecord::new()).is_none());
    }

    #[test]
    fn test_owner_equals_registrant() {
        let raw = RawRecord::new().with("org", vec!["Example Org", "Other"]);
        let domain = Domain::from_raw(&raw);
        assert_eq!(domain.owner, domain.registrant);
        assert_eq!(domain.owner.as_deref(), Some("Example Org"));
    }

    // ==================== dnssec tests ====================

    #[test]
    fn test_dnssec_values() {
        assert!(dnssec(&record("dnssec", "signedDelegation")));
        assert!(!dnssec(&record("dnssec", "unsigned")));
        assert!(!dnssec(&record("dnssec", "Unsigned")));
        assert!(!dnssec(&record("dnssec", vec!["unsigned", "unsigned"])));
        assert!(dnssec(&record("dnssec", vec!["unsigned", "signedDelegation"])));
        assert!(!dnssec(&RawRecord::new()));
        assert!(!dnssec(&record("dnssec", "")));
    }

    // ==================== status tests ====================

    #[test]
    fn test_statuses_preserve_case_and_order() {
        let raw = record(
            "status",
            vec!["clientTransferProhibited", "clientDeleteProhibited"],
        );
        assert_eq!(
            statuses(&raw),
            Some(vec![
                "clientTransferProhibited".to_string(),
                "clientDeleteProhibited".to_string()
            ])
        );
        assert_eq!(
            single_string(&raw, "status").as_deref(),
            Some("clientTransferProhibited")
        );
    }

    #[test]
    fn test_statuses_scalar() {
        let raw = record("status", "OK");
        assert_eq!(statuses(&raw), Some(vec!["OK".to_string()]));
        assert!(statuses(&RawRecord::new()).is_none());
    }

    // ==================== from_raw tests ====================

    #[test]
    fn test_from_raw_empty_record() {
        let domain = Domain::from_raw(&RawRecord::new());
        assert_eq!(domain, Domain::default());
    }

    #[test]
    fn test_from_raw_only_updated_date() {
        let zoned = DateTime::parse_from_rfc3339("2022-01-01T00:00:00+01:00").unwrap();
        let domain = Domain::from_raw(&record("updated_date", zoned));
        assert_eq!(domain.last_updated, Some(Timestamp::Zoned(zoned)));
        assert!(domain.creation_date.is_none());
        assert!(domain.name_servers.is_none());
        assert!(domain.owner.is_none());
        assert!(!domain.dnssec);
    }

    #[test]
    fn test_from_raw_reseller_always_none() {
        let domain = Domain::from_raw(&record("reseller", "Some Reseller"));
        assert!(domain.reseller.is_none());
    }
}
