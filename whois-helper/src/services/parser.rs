//! Parse raw WHOIS response text into a [`RawRecord`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use super::NOT_FOUND_MARKER;
use crate::error::LookupFailure;
use crate::types::{RawField, RawRecord, RawScalar, Timestamp};

/// Field name → line labels, tried in order.
const FIELD_LABELS: &[(&str, &[&str])] = &[
    ("domain_name", &["Domain Name", "domain"]),
    ("registrar", &["Registrar", "Registrar Name", "Sponsoring Registrar"]),
    ("whois_server", &["Registrar WHOIS Server", "Whois Server"]),
    ("updated_date", &["Updated Date", "Last Updated", "Last Modified"]),
    (
        "creation_date",
        &[
            "Creation Date",
            "Created Date",
            "Created",
            "Registration Time",
            "Registration Date",
        ],
    ),
    (
        "expiration_date",
        &[
            "Registry Expiry Date",
            "Registrar Registration Expiration Date",
            "Expiration Date",
            "Expiry Date",
            "Expiration Time",
            "paid-till",
        ],
    ),
    ("name_servers", &["Name Server", "nserver"]),
    ("status", &["Domain Status", "Status", "state"]),
    ("dnssec", &["DNSSEC"]),
    ("name", &["Registrant Name"]),
    ("org", &["Registrant Organization", "Registrant Organisation", "org"]),
    ("registrant_name", &["Registrant", "Registrant Contact Name"]),
    ("admin", &["Admin Name", "Administrative Contact Name"]),
];

const DATE_FIELDS: [&str; 3] = ["creation_date", "expiration_date", "updated_date"];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const ZONED_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S %z"];

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse a raw WHOIS response.
///
/// Blank responses and "No match for" responses are reported as lookup failures
/// carrying the response text, the way WHOIS client libraries do.
pub fn parse_whois_text(raw: &str) -> Result<RawRecord, LookupFailure> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(LookupFailure::Failed("empty WHOIS response".to_string()));
    }
    if text.contains(NOT_FOUND_MARKER) {
        return Err(LookupFailure::Failed(text.to_string()));
    }

    let mut record = RawRecord::new();
    for (name, labels) in FIELD_LABELS {
        let mut values = extract_values(text, labels);
        if *name == "status" {
            let mut tokens: Vec<String> = Vec::new();
            for token in values.iter().map(|v| first_token(v)) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
            values = tokens;
        }
        let scalars: Vec<RawScalar> = if DATE_FIELDS.contains(name) {
            values.into_iter().map(|v| parse_date_value(&v)).collect()
        } else {
            values.into_iter().map(RawScalar::Text).collect()
        };
        if let Some(field) = into_field(scalars) {
            record.insert(*name, field);
        }
    }

    let emails = extract_emails(text);
    if let Some(field) = into_field(emails.into_iter().map(RawScalar::Text).collect()) {
        record.insert("emails", field);
    }

    Ok(record)
}

/// One value stays a scalar, several become a list.
fn into_field(mut values: Vec<RawScalar>) -> Option<RawField> {
    match values.len() {
        0 => None,
        1 => values.pop().map(RawField::Scalar),
        _ => Some(RawField::Sequence(values)),
    }
}

/// Collect the distinct values of every `Label: value` line, in order.
fn extract_values(text: &str, labels: &[&str]) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for label in labels {
        let pattern = format!(r"(?im)^[ \t]*{}:[ \t]*(.+)$", regex::escape(label));
        if let Ok(re) = Regex::new(&pattern) {
            for caps in re.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    let value = m.as_str().trim().to_string();
                    if !value.is_empty() && !values.contains(&value) {
                        values.push(value);
                    }
                }
            }
        }
    }
    values
}

/// EPP statuses are often followed by an ICANN URL.
fn first_token(value: &str) -> String {
    value
        .split_whitespace()
        .next()
        .unwrap_or(value)
        .to_string()
}

fn extract_emails(text: &str) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();
    if let Ok(re) = Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+") {
        for m in re.find_iter(text) {
            let email = m.as_str().trim_end_matches('.').to_lowercase();
            if !emails.contains(&email) {
                emails.push(email);
            }
        }
    }
    emails
}

/// Parse a date value, keeping the text when no known format matches.
fn parse_date_value(value: &str) -> RawScalar {
    parse_date(value).map_or_else(|| RawScalar::Text(value.to_string()), RawScalar::from)
}

fn parse_date(value: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.into());
    }
    for format in ZONED_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.into());
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.into());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(Into::into);
        }
    }
    None
}
