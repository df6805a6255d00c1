//! HTTP client construction.

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::CoreError;

/// Build the HTTP client used for every request of one check run.
///
/// The client keeps a cookie jar so the session cookie set by `/login` is
/// sent on every following request. Certificate checks are relaxed on this
/// client only, never process-wide.
pub fn build_client(options: &ClientOptions) -> Result<Client, CoreError> {
    Client::builder()
        .cookie_store(true)
        .timeout(options.timeout)
        .danger_accept_invalid_certs(options.accept_invalid_certs)
        .build()
        .map_err(CoreError::Http)
}
