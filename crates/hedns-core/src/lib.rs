// # hedns-core
//
// Core library for driving the dns.he.net web console as if it were an API.
//
// ## Architecture Overview
//
// - **DnsConsole**: Trait for a session-backed console client (login, zones, records)
// - **ZoneRef / RecordTarget**: Identity inputs, normalized once per operation
// - **Batch helpers**: Sequential per-subdomain add/delete with aggregated reporting
// - **ConfirmDeletion**: Seam through which callers supply deletion confirmation
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Scraping lives in `hedns-console`, the CLI in `hednsctl`
// 2. **Library-First**: Every command the CLI offers is callable as a library function
// 3. **Soft vs fatal**: Per-item outcomes are values, only fatal conditions are errors
// 4. **Single attempt**: No retry or caching anywhere in the stack

pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod traits;

// Re-export core types for convenience
pub use batch::{BatchReport, ItemReport, ItemStatus, qualify_name};
pub use config::{ConsoleConfig, Credentials};
pub use error::{Error, Result};
pub use model::{NewRecord, Record, RecordTarget, RecordType, Zone, ZoneRef};
pub use traits::{AddOutcome, Confirmation, ConfirmDeletion, DeleteOutcome, DnsConsole};
