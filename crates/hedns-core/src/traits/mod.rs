//! Core traits for the hedns toolkit
//!
//! - [`DnsConsole`]: Session-backed zone/record client
//! - [`ConfirmDeletion`]: Caller-supplied confirmation for irreversible deletes

pub mod confirm;
pub mod console;

pub use confirm::{ConfirmDeletion, Confirmation};
pub use console::{AddOutcome, DeleteOutcome, DnsConsole};
