// # DNS Console Trait
//
// Defines the interface for a session-backed DNS web console client.
//
// ## Implementations
//
// - dns.he.net: `hedns-console` crate
//
// ## Usage
//
// ```rust,ignore
// use hedns_core::{DnsConsole, NewRecord, RecordType, ZoneRef};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let console = /* DnsConsole implementation */;
//
//     let zone = console.find_zone("example.com").await?;
//     let record = NewRecord::new(RecordType::A, "www.example.com", "192.0.2.10");
//     console.add_record(&ZoneRef::from(zone), &record, true).await?;
//
//     Ok(())
// }
// ```

use crate::error::{Error, Result};
use crate::model::{NewRecord, Record, RecordTarget, RecordType, Zone, ZoneRef};
use crate::traits::confirm::Confirmation;
use async_trait::async_trait;

/// Result of an add operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The console confirmed the record was added
    Added,
    /// A record with the same `(name, type)` already exists; nothing was posted
    AlreadyExists {
        /// The record found in the zone
        existing: Record,
    },
    /// The console answered without a success marker
    Rejected,
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Result of a delete operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The console confirmed the record was removed
    Deleted {
        /// Id of the removed record
        record_id: String,
    },
    /// No record with the requested name and type exists
    NotFound,
    /// The confirmer declined; nothing was posted
    Cancelled {
        /// Id of the record that was kept
        record_id: String,
    },
    /// The console answered without a success marker
    Rejected {
        /// Id of the record the deletion was posted for
        record_id: String,
    },
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

/// Trait for DNS console client implementations
///
/// A console client holds one authenticated session for the lifetime of a
/// command. Every operation that needs the session logs in lazily, and a
/// session that is already authenticated is reused without a network round
/// trip.
///
/// # Single attempt
///
/// Implementations make exactly one attempt per HTTP exchange. There is no
/// retry, backoff or caching of zone and record state.
///
/// # Success detection
///
/// The console has no structured status channel. Implementations decide the
/// outcome of a mutation from marker text in the HTML response and keep those
/// markers in one place.
#[async_trait]
pub trait DnsConsole: Send + Sync {
    /// Establish the session if it is not already established
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The session is authenticated
    /// - `Ok(false)`: The console rejected the credentials or set no session
    async fn login(&self) -> Result<bool>;

    /// List every zone in the account, in console order
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// List the A and AAAA records of a zone, in console order
    async fn list_records(&self, zone: &ZoneRef) -> Result<Vec<Record>>;

    /// Create a record
    ///
    /// With `check_exists`, an existing `(name, type)` match short-circuits to
    /// [`AddOutcome::AlreadyExists`] and the mutation endpoint is not contacted.
    async fn add_record(
        &self,
        zone: &ZoneRef,
        record: &NewRecord,
        check_exists: bool,
    ) -> Result<AddOutcome>;

    /// Delete a record
    ///
    /// A [`RecordTarget::Name`] is resolved through [`DnsConsole::find_record`];
    /// a missing record yields [`DeleteOutcome::NotFound`]. The deletion is
    /// posted only once `confirmation` approves the resolved record id.
    async fn delete_record(
        &self,
        zone: &ZoneRef,
        target: &RecordTarget,
        record_type: RecordType,
        confirmation: Confirmation<'_>,
    ) -> Result<DeleteOutcome>;

    /// Get the console name (for logging/debugging)
    fn console_name(&self) -> &'static str;

    /// Find a zone by exact, case-sensitive name
    ///
    /// The first match wins. A missing zone is fatal: [`Error::ZoneNotFound`].
    async fn find_zone(&self, name: &str) -> Result<Zone> {
        self.list_zones()
            .await?
            .into_iter()
            .find(|zone| zone.name == name)
            .ok_or_else(|| Error::zone_not_found(name))
    }

    /// Normalize any zone reference to the provider zone id
    async fn resolve_zone_id(&self, zone: &ZoneRef) -> Result<String> {
        match zone {
            ZoneRef::Id(id) => Ok(id.clone()),
            ZoneRef::Resolved(zone) => Ok(zone.id.clone()),
            ZoneRef::Name(name) => Ok(self.find_zone(name).await?.id),
        }
    }

    /// Find the first record with the given `(name, type)` identity
    async fn find_record(
        &self,
        zone: &ZoneRef,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<Record>> {
        Ok(self
            .list_records(zone)
            .await?
            .into_iter()
            .find(|record| record.matches(name, record_type)))
    }
}
