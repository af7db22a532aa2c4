//! Session establishment
//!
//! The console hands out a session cookie on its landing page and binds it to
//! the account when the login form is posted back. Success is inferred from
//! the answer page, see [`crate::markers::login_succeeded`].

use crate::HeConsole;
use crate::http::excerpt;
use crate::markers;
use hedns_core::{Error, Result};
use reqwest::cookie::CookieStore;
use std::sync::atomic::Ordering;
use tracing::{debug, warn};

/// Value of the login form's submit button
const LOGIN_SUBMIT: &str = "Login!";

/// How much of a refused login page is logged
const LOGIN_EXCERPT_LIMIT: usize = 1000;

impl HeConsole {
    /// Whether a login exchange already succeeded
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Whether the console handed out any cookie
    ///
    /// Cookies scoped to a narrower path than `/` are not returned by the jar
    /// for the root URL, so responses that set one are counted as well.
    fn holds_session_cookie(&self) -> bool {
        self.cookie_received.load(Ordering::SeqCst) || self.jar.cookies(&self.root).is_some()
    }

    /// Log in unless already logged in
    ///
    /// Transport failures are logged and reported as `false`, like a refused
    /// login. An authenticated session short-circuits without network I/O.
    pub(crate) async fn establish_session(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }

        let authenticated = match self.login_exchange().await {
            Ok(authenticated) => authenticated,
            Err(e) => {
                warn!("Login error: {}", e);
                false
            }
        };

        self.authenticated.store(authenticated, Ordering::SeqCst);
        authenticated
    }

    /// Log in, turning a refused login into a fatal error
    pub(crate) async fn ensure_session(&self) -> Result<()> {
        if self.establish_session().await {
            Ok(())
        } else {
            Err(Error::auth(format!(
                "console refused login for {}",
                self.credentials.username()
            )))
        }
    }

    async fn login_exchange(&self) -> Result<bool> {
        debug!("Attempting to login as {}", self.credentials.username());
        let login_url = self.url("/");

        // Landing page sets the pre-auth session cookie
        self.fetch(&login_url).await?;
        debug!("Session cookie before login: {}", self.holds_session_cookie());

        let form = [
            ("email", self.credentials.username().to_string()),
            ("pass", self.credentials.password().to_string()),
            ("submit", LOGIN_SUBMIT.to_string()),
        ];
        let body = self.submit(&login_url, &form).await?;

        let holds_cookie = self.holds_session_cookie();
        let authenticated = markers::login_succeeded(&body, holds_cookie);
        debug!(
            "Login successful: {} (session cookie: {})",
            authenticated, holds_cookie
        );

        if !authenticated {
            warn!(
                "Login failed. Response excerpt:\n{}",
                excerpt(&body, LOGIN_EXCERPT_LIMIT)
            );
        }

        Ok(authenticated)
    }
}
