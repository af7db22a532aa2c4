//! Domain model for zones and address records
//!
//! Everything here is owned by a single command run. Nothing is cached or
//! persisted between invocations.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TTL applied to new records when the caller does not pick one
pub const DEFAULT_TTL: u32 = 300;

/// A DNS zone as listed by the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-assigned opaque identifier
    pub id: String,
    /// Fully-qualified domain name
    pub name: String,
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Supported DNS record types
///
/// Only address records are handled. Every other type is rejected on input
/// and dropped when scraping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// A record (IPv4)
    #[default]
    #[serde(rename = "A")]
    A,
    /// AAAA record (IPv6)
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Wire name used by the console
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            other => Err(Error::unsupported_type(other)),
        }
    }
}

/// An address record scraped from a zone page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned record id
    pub id: String,
    /// Fully-qualified record name
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Time-to-live in seconds
    pub ttl: u32,
    /// Record data, present only when the row carried a content column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Record {
    /// Whether this record has the given `(name, type)` identity
    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.name == name && self.record_type == record_type
    }
}

/// A record to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

impl NewRecord {
    /// Create a record description with the default TTL
    pub fn new(record_type: RecordType, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            record_type,
            name: name.into(),
            content: content.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Any of the forms a caller may hold a zone in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRef {
    /// Raw provider zone id
    Id(String),
    /// Domain name, resolved against the zone list
    Name(String),
    /// Already resolved zone
    Resolved(Zone),
}

impl ZoneRef {
    /// Interpret a user-supplied string: all ASCII digits is an id, anything
    /// else is a name.
    pub fn parse(value: &str) -> Self {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            ZoneRef::Id(value.to_string())
        } else {
            ZoneRef::Name(value.to_string())
        }
    }
}

impl From<Zone> for ZoneRef {
    fn from(zone: Zone) -> Self {
        ZoneRef::Resolved(zone)
    }
}

impl From<&Zone> for ZoneRef {
    fn from(zone: &Zone) -> Self {
        ZoneRef::Resolved(zone.clone())
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneRef::Id(id) => write!(f, "zone #{}", id),
            ZoneRef::Name(name) => f.write_str(name),
            ZoneRef::Resolved(zone) => write!(f, "{} (#{})", zone.name, zone.id),
        }
    }
}

/// The record a deletion acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTarget {
    /// Known provider record id
    Id(String),
    /// Record name, looked up together with the record type
    Name(String),
}

impl fmt::Display for RecordTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTarget::Id(id) => write!(f, "record #{}", id),
            RecordTarget::Name(name) => f.write_str(name),
        }
    }
}
