//! Request plumbing shared by every console exchange
//!
//! One place sends requests, maps transport failures and logs responses, so
//! the scraping and mutation code only deals with response bodies.

use crate::HeConsole;
use hedns_core::{Error, Result};
use reqwest::Response;
use reqwest::header::SET_COOKIE;
use std::sync::atomic::Ordering;
use tracing::debug;

/// Maximum number of bytes of a response body included in debug logs
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary at or below `index`
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Cut `s` to at most `limit` bytes without splitting a character
pub(crate) fn excerpt(s: &str, limit: usize) -> &str {
    &s[..floor_char_boundary(s, limit)]
}

/// Truncate a response body for safe logging
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            excerpt(s, TRUNCATE_LIMIT),
            s.len()
        )
    }
}

impl HeConsole {
    pub(crate) fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// GET a console page and return its HTML
    pub(crate) async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        self.note_cookies(&response);
        read_body(url, response).await
    }

    /// POST a form and return the HTML answer
    ///
    /// Field values are never logged; only their names are.
    pub(crate) async fn submit(&self, url: &str, form: &[(&'static str, String)]) -> Result<String> {
        let fields: Vec<&str> = form.iter().map(|(name, _)| *name).collect();
        debug!("POST {} with fields: {:?}", url, fields);

        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        self.note_cookies(&response);
        read_body(url, response).await
    }

    /// Remember that the console handed out a cookie, whatever its scope
    fn note_cookies(&self, response: &Response) {
        if response.headers().contains_key(SET_COOKIE) {
            self.cookie_received.store(true, Ordering::SeqCst);
        }
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::http(format!("Request to {} timed out: {}", url, err))
    } else {
        Error::http(format!("Request to {} failed: {}", url, err))
    }
}

/// Read the body, treating only server errors as failures
///
/// The console reports business outcomes in page text, often with a 200, so
/// client-side status codes are left for the marker checks to interpret.
async fn read_body(url: &str, response: Response) -> Result<String> {
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| Error::http(format!("Failed to read response body from {}: {}", url, e)))?;

    if status.is_server_error() {
        return Err(Error::http(format!(
            "Console server error (transient): {} - {}",
            status,
            truncate_for_log(&body)
        )));
    }

    debug!("Response body: {}", truncate_for_log(&body));
    Ok(body)
}
