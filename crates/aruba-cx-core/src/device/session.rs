//! Authenticated REST session.
//!
//! The switch allows at most six concurrent API sessions across all clients,
//! so every session that is opened must be logged out again. `close` consumes
//! the session, making a second logout impossible.

use reqwest::Client;

use crate::error::{AuthError, CoreError, SessionError};
use crate::protocol::endpoints::Endpoints;

/// Maximum number of concurrent REST sessions a CX switch accepts.
pub const DEVICE_SESSION_CAP: usize = 6;

/// An open login session bound to one switch.
#[derive(Debug)]
pub struct Session {
    client: Client,
    api_root: String,
    released: bool,
}

impl Session {
    /// Log in with form-encoded credentials.
    ///
    /// Any non-2xx answer is an `AuthError` carrying the HTTP status.
    pub async fn open(
        client: &Client,
        api_root: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, CoreError> {
        let url = Endpoints::login(api_root);
        tracing::debug!(%url, %username, "logging in");

        let response = client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected { url, status }.into());
        }

        tracing::debug!("session opened");
        Ok(Self {
            client: client.clone(),
            api_root: api_root.to_string(),
            released: false,
        })
    }

    /// HTTP client carrying the session cookie
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Log out and release the session slot on the switch.
    pub async fn close(mut self) -> Result<(), CoreError> {
        self.released = true;

        let url = Endpoints::logout(&self.api_root);
        tracing::debug!(%url, "logging out");

        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::LogoutRejected { url, status }.into());
        }

        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.released {
            tracing::warn!(
                api_root = %self.api_root,
                "session dropped without logout, one of {} device session slots stays in use until it expires",
                DEVICE_SESSION_CAP
            );
        }
    }
}
