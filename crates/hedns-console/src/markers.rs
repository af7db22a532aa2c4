//! Response markers
//!
//! The console never returns a structured status. Every outcome is inferred
//! from text in the HTML it sends back, and all of that text lives here.

/// Present on the login page when the credentials were refused
pub const LOGIN_REJECTED: &str = "Incorrect login";

/// Any of these (case-insensitive) means a record was created
pub const RECORD_ADDED: [&str; 2] = ["successfully added", "record updated"];

/// Any of these (case-insensitive) means a record was removed
pub const RECORD_DELETED: [&str; 2] = ["successfully removed", "successfully deleted"];

/// Login succeeded when the page does not complain and a session cookie exists
pub fn login_succeeded(body: &str, holds_cookie: bool) -> bool {
    !body.contains(LOGIN_REJECTED) && holds_cookie
}

pub fn record_added(body: &str) -> bool {
    contains_any(body, &RECORD_ADDED)
}

pub fn record_deleted(body: &str) -> bool {
    contains_any(body, &RECORD_DELETED)
}

fn contains_any(body: &str, markers: &[&str]) -> bool {
    let body = body.to_lowercase();
    markers.iter().any(|marker| body.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejected_text_wins_over_cookie() {
        let body = "<div id=\"dns_err\">Incorrect login</div>";
        assert!(!login_succeeded(body, true));
    }

    #[test]
    fn test_login_without_cookie_fails() {
        assert!(!login_succeeded("<h1>Welcome</h1>", false));
        assert!(login_succeeded("<h1>Welcome</h1>", true));
    }

    #[test]
    fn test_login_marker_is_case_sensitive() {
        // Only the console's exact wording counts as a refusal
        assert!(login_succeeded("incorrect LOGIN", true));
    }

    #[test]
    fn test_record_added_markers() {
        assert!(record_added("<div id=\"dns_status\">Successfully added new record.</div>"));
        assert!(record_added("Record updated"));
        assert!(!record_added("<div id=\"dns_err\">Invalid IPv4 address</div>"));
    }

    #[test]
    fn test_record_deleted_markers() {
        assert!(record_deleted("Successfully removed record."));
        assert!(record_deleted("SUCCESSFULLY DELETED"));
        assert!(!record_deleted("Successfully added new record."));
    }
}
