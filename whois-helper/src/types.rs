//! Public types: the normalized [`Domain`] record and the raw lookup shapes it is built from.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A point in time reported by a WHOIS server.
///
/// Registries disagree on whether they report an offset, so both forms are kept
/// as returned instead of guessing a timezone for the naive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Timestamp carrying a UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Timestamp without timezone information.
    Naive(NaiveDateTime),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(dt) => write!(f, "{dt}"),
            Self::Naive(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Naive(dt)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(dt)
    }
}

/// A single value as returned by the lookup backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScalar {
    Text(String),
    Timestamp(Timestamp),
    Bool(bool),
    Integer(i64),
}

impl RawScalar {
    /// Empty text, `false` and `0` carry no information and count as missing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Timestamp(_) => false,
            Self::Bool(b) => !b,
            Self::Integer(i) => *i == 0,
        }
    }

    /// The timestamp, if this value is one.
    pub const fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for RawScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawScalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for RawScalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RawScalar {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Timestamp> for RawScalar {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<NaiveDateTime> for RawScalar {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Timestamp(dt.into())
    }
}

impl From<DateTime<FixedOffset>> for RawScalar {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(dt.into())
    }
}

/// A raw field value: lookup libraries return either a bare value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    Scalar(RawScalar),
    Sequence(Vec<RawScalar>),
}

impl RawField {
    /// All values of the field, in the order returned.
    pub fn values(&self) -> &[RawScalar] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// The bare value, or the first element of a list.
    pub fn first(&self) -> Option<&RawScalar> {
        self.values().first()
    }

    /// Whether the field carries nothing: an empty list or an empty scalar.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(value) => value.is_empty(),
            Self::Sequence(values) => values.is_empty(),
        }
    }
}

impl From<RawScalar> for RawField {
    fn from(value: RawScalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<bool> for RawField {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<NaiveDateTime> for RawField {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Scalar(dt.into())
    }
}

impl From<DateTime<FixedOffset>> for RawField {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Scalar(dt.into())
    }
}

impl<T: Into<RawScalar>> From<Vec<T>> for RawField {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// Raw lookup result keyed by the lookup library's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, RawField>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawField>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawField>) {
        self.fields.insert(name.into(), value.into());
    }

    /// The named field, or `None` when it is absent or empty.
    pub fn field(&self, name: &str) -> Option<&RawField> {
        self.fields.get(name).filter(|field| !field.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawField>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Normalized domain registration record.
///
/// Every field is optional; the record is built in one pass by
/// [`Domain::from_raw`] and never partially.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Administrative contact.
    pub admin: Option<String>,
    /// Registration creation date.
    pub creation_date: Option<Timestamp>,
    /// Whether the domain has a signed delegation.
    #[serde(default)]
    pub dnssec: bool,
    /// Registration expiration date.
    pub expiration_date: Option<Timestamp>,
    /// Last time the registration was updated.
    pub last_updated: Option<Timestamp>,
    /// Authoritative name servers, lower-cased.
    pub name_servers: Option<Vec<String>>,
    /// Registrant name or organization.
    pub owner: Option<String>,
    /// Domain registrar (e.g. "Cloudflare, Inc.").
    pub registrar: Option<String>,
    /// Always `None`: no lookup backend reports resellers.
    pub reseller: Option<String>,
    /// Same value as [`owner`](Self::owner).
    pub registrant: Option<String>,
    /// First EPP status code.
    pub status: Option<String>,
    /// All EPP status codes, as returned.
    pub statuses: Option<Vec<String>>,
}
