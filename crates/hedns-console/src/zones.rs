//! Zone list extraction
//!
//! The account overview page lists one zone per row of `table#domains_table`.
//! The zone name sits in the third cell; the zone id only appears inside the
//! `onclick` handler of the row's edit button, e.g.
//! `javascript:document.location.href='?hosted_dns_zoneid=123456&menu=edit_zone&hosted_dns_editzone'`.

use crate::HeConsole;
use crate::scrape::{capture, cell_text, pattern, selector};
use hedns_core::{Result, Zone};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static DOMAINS_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table#domains_table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static EDIT_BUTTON: LazyLock<Selector> = LazyLock::new(|| selector(r#"img[alt="edit"]"#));
static ZONE_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"hosted_dns_zoneid=(\d+)"));

/// Zone rows carry at least this many cells
const MIN_ZONE_CELLS: usize = 3;

/// Cell holding the zone name
const NAME_COLUMN: usize = 2;

/// Extract zones from the account overview page, in page order
///
/// Rows without enough cells or without an id-bearing edit button are
/// skipped. A page without the domains table yields no zones.
pub fn parse_zones(html: &str) -> Vec<Zone> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&DOMAINS_TABLE).next() else {
        debug!("No domains table found on zone page");
        return Vec::new();
    };

    let mut zones = Vec::new();
    for row in table.select(&ROW) {
        let cells: Vec<_> = row.select(&CELL).collect();
        if cells.len() < MIN_ZONE_CELLS {
            continue;
        }

        let name = cell_text(&cells[NAME_COLUMN]);
        let zone_id = row
            .select(&EDIT_BUTTON)
            .next()
            .and_then(|button| button.value().attr("onclick"))
            .and_then(|onclick| capture(&ZONE_ID, onclick));

        match zone_id {
            Some(id) => zones.push(Zone::new(id, name)),
            None => debug!("Skipping zone row without edit id: {}", name),
        }
    }

    zones
}

impl HeConsole {
    pub(crate) async fn scrape_zones(&self) -> Result<Vec<Zone>> {
        let body = self.fetch(&self.url("/index.cgi")).await?;
        let zones = parse_zones(&body);
        debug!("Found {} zone(s)", zones.len());
        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES_PAGE: &str = r#"
<html><body>
<table id="domains_table">
  <tr><th>&nbsp;</th><th>&nbsp;</th><th>Zone</th></tr>
  <tr>
    <td><img alt="edit" src="/include/images/edit.png"
         onclick="javascript:document.location.href='?hosted_dns_zoneid=1001&menu=edit_zone&hosted_dns_editzone'"></td>
    <td><img alt="delete" onclick="delete_dom(this);" name="example.com" value="1001"></td>
    <td><span>example.com</span></td>
  </tr>
  <tr>
    <td><img alt="edit"
         onclick="javascript:document.location.href='?hosted_dns_zoneid=1002&menu=edit_zone&hosted_dns_editzone'"></td>
    <td></td>
    <td> example.org </td>
  </tr>
</table>
</body></html>
"#;

    #[test]
    fn test_parse_zones() {
        let zones = parse_zones(ZONES_PAGE);
        assert_eq!(
            zones,
            vec![Zone::new("1001", "example.com"), Zone::new("1002", "example.org")]
        );
    }

    #[test]
    fn test_rows_without_edit_id_are_skipped() {
        let html = r#"
<table id="domains_table">
  <tr><td></td><td></td><td>no-button.example</td></tr>
  <tr><td><img alt="edit" onclick="alert('x')"></td><td></td><td>no-id.example</td></tr>
  <tr><td><img alt="edit" onclick="?hosted_dns_zoneid=7"></td><td>short row</td></tr>
  <tr><td><img alt="edit" onclick="?hosted_dns_zoneid=8"></td><td></td><td>ok.example</td></tr>
</table>"#;

        assert_eq!(parse_zones(html), vec![Zone::new("8", "ok.example")]);
    }

    #[test]
    fn test_missing_table_yields_nothing() {
        let html = r#"<table id="other"><tr><td><img alt="edit" onclick="hosted_dns_zoneid=1"></td><td></td><td>x.example</td></tr></table>"#;
        assert!(parse_zones(html).is_empty());
    }
}
