//! Record table extraction
//!
//! The zone edit page has no table id for its records. Record rows are the
//! ones styled `dns_tr` or `dns_tr_alt` (alternating row colours), laid out as:
//!
//! | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
//! |---|---|---|---|---|---|---|---|
//! | zone id, edit/delete links | record id | name | type | TTL | priority | data | ddns |
//!
//! Only A and AAAA rows are kept. The page is not paginated.

use crate::HeConsole;
use crate::scrape::{capture, cell_text, pattern, selector};
use hedns_core::{Record, RecordType, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, trace};

static RECORD_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.dns_tr, tr.dns_tr_alt"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static ACTION_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[onclick]"));
static ACTION_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?:delete|edit)_record\((\d+)\)"));

/// Rows with fewer cells are not record rows
const MIN_RECORD_CELLS: usize = 5;

const ID_COLUMN: usize = 1;
const NAME_COLUMN: usize = 2;
const TYPE_COLUMN: usize = 3;
const TTL_COLUMN: usize = 4;
const CONTENT_COLUMN: usize = 6;

/// Extract the A/AAAA records of a zone edit page, in page order
pub fn parse_records(html: &str) -> Vec<Record> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for row in document.select(&RECORD_ROW) {
        let cells: Vec<_> = row.select(&CELL).collect();
        if cells.len() < MIN_RECORD_CELLS {
            continue;
        }

        // The id column is authoritative. The id in the row's action links is
        // only compared for diagnostics.
        let id = cell_text(&cells[ID_COLUMN]);
        if let Some(link_id) = action_link_id(&cells[0]).filter(|link_id| *link_id != id) {
            trace!("Record row action link id {} differs from id column {}", link_id, id);
        }

        let Ok(record_type) = cell_text(&cells[TYPE_COLUMN]).parse::<RecordType>() else {
            continue;
        };

        let name = cell_text(&cells[NAME_COLUMN]);
        let ttl_text = cell_text(&cells[TTL_COLUMN]);
        let Ok(ttl) = ttl_text.parse::<u32>() else {
            debug!("Skipping record {} with unreadable TTL '{}'", name, ttl_text);
            continue;
        };

        let content = cells
            .get(CONTENT_COLUMN)
            .map(cell_text)
            .filter(|content| !content.is_empty());

        records.push(Record {
            id,
            name,
            record_type,
            ttl,
            content,
        });
    }

    records
}

/// Record id embedded in an `edit_record(N)` / `delete_record(N)` handler
fn action_link_id(cell: &ElementRef<'_>) -> Option<String> {
    cell.select(&ACTION_LINK)
        .filter_map(|link| link.value().attr("onclick"))
        .find_map(|onclick| capture(&ACTION_ID, onclick))
        .map(str::to_string)
}

impl HeConsole {
    pub(crate) async fn scrape_records(&self, zone_id: &str) -> Result<Vec<Record>> {
        let url = self.url(&format!(
            "/index.cgi?hosted_dns_zoneid={}&menu=edit_zone&hosted_dns_editzone",
            zone_id
        ));
        let body = self.fetch(&url).await?;
        let records = parse_records(&body);
        debug!("Found {} address record(s) in zone {}", records.len(), zone_id);
        Ok(records)
    }
}
