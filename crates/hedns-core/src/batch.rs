//! Sequential per-subdomain operations
//!
//! A batch walks its subdomains one at a time against a single console
//! session. One item failing does not stop the others; the report records
//! every item and the caller decides the exit status from it.
//!
//! ## Item Flow
//!
//! 1. Qualify the subdomain against the target domain
//! 2. Call the console operation for that single name
//! 3. Record the outcome (soft failures and transport errors alike)
//! 4. Abort only when the error is fatal for the whole command

use crate::error::Result;
use crate::model::{NewRecord, RecordTarget, RecordType, Zone, ZoneRef};
use crate::traits::{AddOutcome, Confirmation, DeleteOutcome, DnsConsole};
use serde::Serialize;
use tracing::{debug, warn};

/// Per-item status within a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Added,
    Deleted,
    AlreadyExists { content: Option<String> },
    NotFound,
    Cancelled,
    Rejected,
    Failed { error: String },
}

impl ItemStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ItemStatus::Added | ItemStatus::Deleted)
    }
}

impl From<AddOutcome> for ItemStatus {
    fn from(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added => ItemStatus::Added,
            AddOutcome::AlreadyExists { existing } => ItemStatus::AlreadyExists {
                content: existing.content,
            },
            AddOutcome::Rejected => ItemStatus::Rejected,
        }
    }
}

impl From<DeleteOutcome> for ItemStatus {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted { .. } => ItemStatus::Deleted,
            DeleteOutcome::NotFound => ItemStatus::NotFound,
            DeleteOutcome::Cancelled { .. } => ItemStatus::Cancelled,
            DeleteOutcome::Rejected { .. } => ItemStatus::Rejected,
        }
    }
}

/// Outcome for one subdomain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    /// Fully-qualified record name the operation acted on
    pub name: String,
    #[serde(flatten)]
    pub status: ItemStatus,
}

/// Aggregate of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.status.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    fn push(&mut self, name: String, status: ItemStatus) {
        self.items.push(ItemReport { name, status });
    }
}

/// Expand a bare label into a name inside `domain`
///
/// Names already ending in `domain`, or containing a dot, are taken as given.
pub fn qualify_name(subdomain: &str, domain: &str) -> String {
    if subdomain.ends_with(domain) || subdomain.contains('.') {
        subdomain.to_string()
    } else {
        format!("{}.{}", subdomain, domain)
    }
}

/// Add an address record for each subdomain of `zone`
pub async fn add_subdomains(
    console: &dyn DnsConsole,
    zone: &Zone,
    subdomains: &[String],
    content: &str,
    record_type: RecordType,
    ttl: u32,
) -> Result<BatchReport> {
    let zone_ref = ZoneRef::from(zone);
    let mut report = BatchReport::default();

    for subdomain in subdomains {
        let name = qualify_name(subdomain, &zone.name);
        let record = NewRecord::new(record_type, name.clone(), content).with_ttl(ttl);

        let status = match console.add_record(&zone_ref, &record, true).await {
            Ok(outcome) => ItemStatus::from(outcome),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("{}: adding {} failed: {}", console.console_name(), name, e);
                ItemStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        debug!("Add {} finished: {:?}", name, status);
        report.push(name, status);
    }

    Ok(report)
}

/// Delete the address record of each subdomain of `zone`
pub async fn delete_subdomains(
    console: &dyn DnsConsole,
    zone: &Zone,
    subdomains: &[String],
    record_type: RecordType,
    confirmation: Confirmation<'_>,
) -> Result<BatchReport> {
    let zone_ref = ZoneRef::from(zone);
    let mut report = BatchReport::default();

    for subdomain in subdomains {
        let name = qualify_name(subdomain, &zone.name);
        let target = RecordTarget::Name(name.clone());

        let status = match console
            .delete_record(&zone_ref, &target, record_type, confirmation)
            .await
        {
            Ok(outcome) => ItemStatus::from(outcome),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("{}: deleting {} failed: {}", console.console_name(), name, e);
                ItemStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        debug!("Delete {} finished: {:?}", name, status);
        report.push(name, status);
    }

    Ok(report)
}
