//! Canned console pages and mock-server wiring shared by the console suites

#![allow(dead_code)]

use hedns_console::HeConsole;
use hedns_core::{ConsoleConfig, Credentials};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "user@example.com";
pub const PASSWORD: &str = "correct horse";

pub const LANDING_PAGE: &str = r#"<html><body>
<form name="login" method="post" action="/">
  <input type="text" name="email"><input type="password" name="pass">
  <input type="submit" name="submit" value="Login!">
</form></body></html>"#;

pub const WELCOME_PAGE: &str = r#"<html><body><div id="account_menu">Logout</div></body></html>"#;

pub const REFUSED_PAGE: &str =
    r#"<html><body><div id="dns_err">Incorrect login - please try again</div></body></html>"#;

pub const ADDED_PAGE: &str =
    r#"<html><body><div id="dns_status">Successfully added new record to example.com</div></body></html>"#;

pub const DELETED_PAGE: &str =
    r#"<html><body><div id="dns_status">Successfully removed record.</div></body></html>"#;

pub const ERROR_PAGE: &str =
    r#"<html><body><div id="dns_err">Invalid IPv4 address</div></body></html>"#;

/// Account overview with one row per `(zone_id, name)`
pub fn zones_page(zones: &[(&str, &str)]) -> String {
    let rows: String = zones
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<tr>
  <td><img alt="edit" onclick="javascript:document.location.href='?hosted_dns_zoneid={id}&menu=edit_zone&hosted_dns_editzone'"></td>
  <td><img alt="delete" onclick="delete_dom(this);" value="{id}"></td>
  <td>{name}</td>
</tr>"#
            )
        })
        .collect();

    format!(
        r#"<html><body><table id="domains_table"><tr><th></th><th></th><th>Zone</th></tr>{rows}</table></body></html>"#
    )
}

/// Zone edit page with one row per `(record_id, name, type, ttl, content)`
pub fn records_page(records: &[(&str, &str, &str, &str, &str)]) -> String {
    let rows: String = records
        .iter()
        .enumerate()
        .map(|(i, (id, name, rtype, ttl, content))| {
            let class = if i % 2 == 0 { "dns_tr" } else { "dns_tr_alt" };
            format!(
                r#"<tr class="{class}">
  <td class="hidden"><a onclick="delete_record({id})">delete</a></td>
  <td class="hidden">{id}</td>
  <td class="dns_view">{name}</td>
  <td><span class="rrlabel {rtype}">{rtype}</span></td>
  <td>{ttl}</td>
  <td>-</td>
  <td>{content}</td>
  <td></td>
</tr>"#
            )
        })
        .collect();

    format!(
        r#"<html><body><table><tr><th>Name</th><th>Type</th><th>TTL</th></tr>{rows}</table></body></html>"#
    )
}

/// A client pointed at the mock server
pub fn console(server: &MockServer) -> HeConsole {
    let config = ConsoleConfig::new().with_base_url(server.uri());
    let credentials = Credentials::new(USERNAME, PASSWORD).expect("valid credentials");
    HeConsole::new(&config, credentials).expect("client builds")
}

/// Landing page that sets a session cookie, expected exactly once
pub async fn mount_landing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "CGISESSID=abc123def456; path=/")
                .set_body_string(LANDING_PAGE),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Successful landing + login exchange, each expected exactly once
pub async fn mount_login(server: &MockServer) {
    mount_landing(server).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("email="))
        .respond_with(ResponseTemplate::new(200).set_body_string(WELCOME_PAGE))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_zones(server: &MockServer, zones: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/index.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(zones_page(zones)))
        .mount(server)
        .await;
}

/// Zone edit page; outranks the zone list mock on the shared path
pub async fn mount_records(
    server: &MockServer,
    zone_id: &str,
    records: &[(&str, &str, &str, &str, &str)],
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path("/index.cgi"))
        .and(query_param("hosted_dns_zoneid", zone_id))
        .and(query_param("menu", "edit_zone"))
        .respond_with(ResponseTemplate::new(200).set_body_string(records_page(records)))
        .with_priority(1)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Add-record endpoint answering with `body`
pub async fn mount_add(server: &MockServer, zone_id: &str, body: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("hosted_dns_zoneid", zone_id))
        .and(body_string_contains("hosted_dns_editrecord=Submit"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Delete-record endpoint answering with `body`
pub async fn mount_delete(server: &MockServer, record_id: &str, body: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/index.cgi"))
        .and(body_string_contains("hosted_dns_delrecord=1"))
        .and(body_string_contains(format!("hosted_dns_recordid={}", record_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}
