// # dns.he.net Console Client
//
// This crate drives the Hurricane Electric DNS web console, which has no API,
// as if it were one. It implements `hedns_core::DnsConsole` on top of an
// authenticated cookie session, HTML scraping and form posts.
//
// ## Behaviour
//
// - Lazy, memoized login: the first operation that needs a session logs in
// - One HTTP exchange per step, strictly sequential
// - Zones scraped from `table#domains_table` on `/index.cgi`
// - Records scraped from the zone edit page rows (`tr.dns_tr`, `tr.dns_tr_alt`)
// - Add/delete posted as the console's own forms
// - Outcome decided by marker text in the response (see `markers`)
// - NO retry, NO caching of zones or records between calls
//
// ## Security Requirements
//
// - The password NEVER appears in logs or Debug output
// - Posted form fields are logged by name only
//
// ## Console Endpoints
//
// - Login: GET `/` then POST `/` (`email`, `pass`, `submit`)
// - List zones: GET `/index.cgi`
// - List records: GET `/index.cgi?hosted_dns_zoneid=N&menu=edit_zone&hosted_dns_editzone`
// - Add record: POST `/?hosted_dns_zoneid=N&menu=edit_zone&hosted_dns_editzone`
// - Delete record: POST `/index.cgi`

mod http;
pub mod markers;
mod mutation;
pub mod records;
mod scrape;
mod session;
pub mod zones;

use async_trait::async_trait;
use hedns_core::{
    AddOutcome, Confirmation, ConsoleConfig, Credentials, DeleteOutcome, DnsConsole, Error,
    NewRecord, Record, RecordTarget, RecordType, Result, Zone, ZoneRef,
};
use reqwest::Url;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub use records::parse_records;
pub use zones::parse_zones;

/// dns.he.net console client
///
/// Holds one cookie session for its whole lifetime. The session is never
/// refreshed: if the console expires it mid-run, later calls fail.
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the password.
pub struct HeConsole {
    /// Console root without a trailing slash
    base_url: String,

    /// Parsed console root, used to query the cookie jar
    root: Url,

    /// Login credentials
    /// ⚠️ NEVER log the password
    credentials: Credentials,

    /// HTTP client sharing `jar`
    client: reqwest::Client,

    /// Session cookies
    jar: Arc<Jar>,

    /// Set once any response carried a `Set-Cookie` header
    cookie_received: AtomicBool,

    /// Set once a login exchange succeeded
    authenticated: AtomicBool,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for HeConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeConsole")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl HeConsole {
    /// Create a console client
    ///
    /// No network activity happens here; the session is established by the
    /// first operation that needs it.
    pub fn new(config: &ConsoleConfig, credentials: Credentials) -> Result<Self> {
        config.validate()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let root = Url::parse(&format!("{}/", base_url))
            .map_err(|e| Error::config(format!("Invalid console URL {}: {}", base_url, e)))?;

        let jar = Arc::new(Jar::default());
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| concat!("hedns/", env!("CARGO_PKG_VERSION")).to_string());

        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            root,
            credentials,
            client,
            jar,
            cookie_received: AtomicBool::new(false),
            authenticated: AtomicBool::new(false),
        })
    }

    /// Create a client for the public console with default settings
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::new(&ConsoleConfig::default(), credentials)
    }

    /// Resolve a zone reference and check the id can be embedded in a URL
    async fn zone_id(&self, zone: &ZoneRef) -> Result<String> {
        let zone_id = self.resolve_zone_id(zone).await?;
        if zone_id.is_empty() || !zone_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_input(format!(
                "Zone id must be numeric. Got: '{}'",
                zone_id
            )));
        }
        Ok(zone_id)
    }
}

#[async_trait]
impl DnsConsole for HeConsole {
    async fn login(&self) -> Result<bool> {
        Ok(self.establish_session().await)
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.ensure_session().await?;
        self.scrape_zones().await
    }

    async fn list_records(&self, zone: &ZoneRef) -> Result<Vec<Record>> {
        self.ensure_session().await?;
        let zone_id = self.zone_id(zone).await?;
        self.scrape_records(&zone_id).await
    }

    async fn add_record(
        &self,
        zone: &ZoneRef,
        record: &NewRecord,
        check_exists: bool,
    ) -> Result<AddOutcome> {
        self.ensure_session().await?;
        let zone_id = self.zone_id(zone).await?;
        self.create_record(&zone_id, record, check_exists).await
    }

    async fn delete_record(
        &self,
        zone: &ZoneRef,
        target: &RecordTarget,
        record_type: RecordType,
        confirmation: Confirmation<'_>,
    ) -> Result<DeleteOutcome> {
        self.ensure_session().await?;
        let zone_id = self.zone_id(zone).await?;
        self.remove_record(&zone_id, target, record_type, confirmation)
            .await
    }

    fn console_name(&self) -> &'static str {
        "dns.he.net"
    }
}
