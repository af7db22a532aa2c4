//! Record creation and deletion
//!
//! Both mutations replay the console's own HTML forms. Neither is confirmed
//! by re-reading the zone; the answer page's marker text is the only signal.

use crate::HeConsole;
use crate::markers;
use hedns_core::{
    AddOutcome, Confirmation, DeleteOutcome, DnsConsole, NewRecord, RecordTarget, RecordType,
    Result, ZoneRef,
};
use tracing::{debug, info, warn};

/// Form fields of the "add record" dialog
///
/// An empty `hosted_dns_recordid` asks the console to create a record.
/// `Priority` only matters for MX/SRV and stays empty.
pub(crate) fn add_record_form(zone_id: &str, record: &NewRecord) -> Vec<(&'static str, String)> {
    vec![
        ("account", String::new()),
        ("menu", "edit_zone".to_string()),
        ("Type", record.record_type.as_str().to_string()),
        ("hosted_dns_zoneid", zone_id.to_string()),
        ("hosted_dns_recordid", String::new()),
        ("hosted_dns_editzone", "1".to_string()),
        ("Priority", String::new()),
        ("Name", record.name.clone()),
        ("Content", record.content.clone()),
        ("TTL", record.ttl.to_string()),
        ("hosted_dns_editrecord", "Submit".to_string()),
    ]
}

/// Form fields of the delete confirmation dialog
pub(crate) fn delete_record_form(zone_id: &str, record_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("hosted_dns_zoneid", zone_id.to_string()),
        ("hosted_dns_recordid", record_id.to_string()),
        ("menu", "edit_zone".to_string()),
        ("hosted_dns_delconfirm", "delete".to_string()),
        ("hosted_dns_editzone", "1".to_string()),
        ("hosted_dns_delrecord", "1".to_string()),
    ]
}

impl HeConsole {
    pub(crate) async fn create_record(
        &self,
        zone_id: &str,
        record: &NewRecord,
        check_exists: bool,
    ) -> Result<AddOutcome> {
        if check_exists {
            let zone = ZoneRef::Id(zone_id.to_string());
            if let Some(existing) = self
                .find_record(&zone, &record.name, record.record_type)
                .await?
            {
                warn!(
                    "Record '{}' of type '{}' already exists with content '{}'",
                    record.name,
                    record.record_type,
                    existing.content.as_deref().unwrap_or("unknown")
                );
                return Ok(AddOutcome::AlreadyExists { existing });
            }
        }

        let url = self.url(&format!(
            "/?hosted_dns_zoneid={}&menu=edit_zone&hosted_dns_editzone",
            zone_id
        ));
        debug!(
            "Adding {} record {} -> {} (ttl {}) to zone {}",
            record.record_type, record.name, record.content, record.ttl, zone_id
        );

        let body = self.submit(&url, &add_record_form(zone_id, record)).await?;
        let added = markers::record_added(&body);
        info!("Record '{}' added successfully: {}", record.name, added);

        Ok(if added {
            AddOutcome::Added
        } else {
            AddOutcome::Rejected
        })
    }

    pub(crate) async fn remove_record(
        &self,
        zone_id: &str,
        target: &RecordTarget,
        record_type: RecordType,
        confirmation: Confirmation<'_>,
    ) -> Result<DeleteOutcome> {
        let record_id = match target {
            RecordTarget::Id(id) => id.clone(),
            RecordTarget::Name(name) => {
                let zone = ZoneRef::Id(zone_id.to_string());
                match self.find_record(&zone, name, record_type).await? {
                    Some(record) => record.id,
                    None => {
                        warn!("Record '{}' not found", name);
                        return Ok(DeleteOutcome::NotFound);
                    }
                }
            }
        };

        if !confirmation.approve(&record_id) {
            info!("Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled { record_id });
        }

        let url = self.url("/index.cgi");
        debug!("Deleting record {} from zone {}", record_id, zone_id);

        let body = self
            .submit(&url, &delete_record_form(zone_id, &record_id))
            .await?;
        let deleted = markers::record_deleted(&body);
        info!("Record '{}' deleted successfully: {}", target, deleted);

        Ok(if deleted {
            DeleteOutcome::Deleted { record_id }
        } else {
            DeleteOutcome::Rejected { record_id }
        })
    }
}
