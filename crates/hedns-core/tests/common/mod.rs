//! Test doubles and common utilities for contract tests
//!
//! The mock console keeps zones and records in memory and counts every call,
//! so tests can assert which operations reached the "network".

#![allow(dead_code)]

use async_trait::async_trait;
use hedns_core::error::{Error, Result};
use hedns_core::{
    AddOutcome, Confirmation, DeleteOutcome, DnsConsole, NewRecord, Record, RecordTarget,
    RecordType, Zone, ZoneRef,
};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// An in-memory console that tracks calls
pub struct MockConsole {
    zones: Vec<Zone>,
    records: Mutex<Vec<Record>>,
    authenticated: AtomicBool,
    accept_login: bool,
    /// Names whose mutation the console "rejects" (no success marker)
    rejected: HashSet<String>,
    /// Names whose mutation fails at the transport level
    broken: HashSet<String>,
    login_exchanges: AtomicUsize,
    list_zone_calls: AtomicUsize,
    list_record_calls: AtomicUsize,
    add_posts: AtomicUsize,
    delete_posts: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockConsole {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            records: Mutex::new(Vec::new()),
            authenticated: AtomicBool::new(false),
            accept_login: true,
            rejected: HashSet::new(),
            broken: HashSet::new(),
            login_exchanges: AtomicUsize::new(0),
            list_zone_calls: AtomicUsize::new(0),
            list_record_calls: AtomicUsize::new(0),
            add_posts: AtomicUsize::new(0),
            delete_posts: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1000),
        }
    }

    pub fn with_record(self, name: &str, record_type: RecordType, content: &str) -> Self {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.records.lock().unwrap().push(Record {
            id,
            name: name.to_string(),
            record_type,
            ttl: 300,
            content: Some(content.to_string()),
        });
        self
    }

    pub fn refusing_login(mut self) -> Self {
        self.accept_login = false;
        self
    }

    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    pub fn breaking(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    pub fn login_exchanges(&self) -> usize {
        self.login_exchanges.load(Ordering::SeqCst)
    }

    pub fn list_zone_calls(&self) -> usize {
        self.list_zone_calls.load(Ordering::SeqCst)
    }

    pub fn list_record_calls(&self) -> usize {
        self.list_record_calls.load(Ordering::SeqCst)
    }

    pub fn add_posts(&self) -> usize {
        self.add_posts.load(Ordering::SeqCst)
    }

    pub fn delete_posts(&self) -> usize {
        self.delete_posts.load(Ordering::SeqCst)
    }

    pub fn record_names(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    async fn ensure_login(&self) -> Result<()> {
        if self.login().await? {
            Ok(())
        } else {
            Err(Error::auth("mock login failed"))
        }
    }
}

#[async_trait]
impl DnsConsole for MockConsole {
    async fn login(&self) -> Result<bool> {
        if !self.authenticated.load(Ordering::SeqCst) {
            self.login_exchanges.fetch_add(1, Ordering::SeqCst);
            self.authenticated.store(self.accept_login, Ordering::SeqCst);
        }
        Ok(self.authenticated.load(Ordering::SeqCst))
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.ensure_login().await?;
        self.list_zone_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.zones.clone())
    }

    async fn list_records(&self, zone: &ZoneRef) -> Result<Vec<Record>> {
        self.ensure_login().await?;
        self.resolve_zone_id(zone).await?;
        self.list_record_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().clone())
    }

    async fn add_record(
        &self,
        zone: &ZoneRef,
        record: &NewRecord,
        check_exists: bool,
    ) -> Result<AddOutcome> {
        self.ensure_login().await?;
        let zone_ref = ZoneRef::Id(self.resolve_zone_id(zone).await?);

        if check_exists
            && let Some(existing) = self
                .find_record(&zone_ref, &record.name, record.record_type)
                .await?
        {
            return Ok(AddOutcome::AlreadyExists { existing });
        }

        if self.broken.contains(&record.name) {
            return Err(Error::http("connection reset by peer"));
        }

        self.add_posts.fetch_add(1, Ordering::SeqCst);
        if self.rejected.contains(&record.name) {
            return Ok(AddOutcome::Rejected);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.records.lock().unwrap().push(Record {
            id,
            name: record.name.clone(),
            record_type: record.record_type,
            ttl: record.ttl,
            content: Some(record.content.clone()),
        });
        Ok(AddOutcome::Added)
    }

    async fn delete_record(
        &self,
        zone: &ZoneRef,
        target: &RecordTarget,
        record_type: RecordType,
        confirmation: Confirmation<'_>,
    ) -> Result<DeleteOutcome> {
        self.ensure_login().await?;
        let zone_ref = ZoneRef::Id(self.resolve_zone_id(zone).await?);

        let record_id = match target {
            RecordTarget::Id(id) => id.clone(),
            RecordTarget::Name(name) => {
                match self.find_record(&zone_ref, name, record_type).await? {
                    Some(record) => record.id,
                    None => return Ok(DeleteOutcome::NotFound),
                }
            }
        };

        if !confirmation.approve(&record_id) {
            return Ok(DeleteOutcome::Cancelled { record_id });
        }

        if let RecordTarget::Name(name) = target
            && self.broken.contains(name)
        {
            return Err(Error::http("connection reset by peer"));
        }

        self.delete_posts.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().retain(|r| r.id != record_id);
        Ok(DeleteOutcome::Deleted { record_id })
    }

    fn console_name(&self) -> &'static str {
        "mock"
    }
}

/// A single-zone account for example.com
pub fn example_zone() -> Zone {
    Zone::new("123456", "example.com")
}

pub fn example_console() -> MockConsole {
    MockConsole::new(vec![example_zone(), Zone::new("654321", "example.org")])
}

pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
