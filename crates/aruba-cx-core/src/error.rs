//! Error types for Aruba CX core.

use reqwest::StatusCode;
use thiserror::Error;

/// Core error type for switch checks.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(String),
}

/// Login failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login to {url} rejected with HTTP {status}{}", status_hint(.status))]
    Rejected { url: String, status: StatusCode },
}

/// Read request failures.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("GET {url} failed with HTTP {status}{}", status_hint(.status))]
    Status { url: String, status: StatusCode },

    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Logout failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Logout from {url} rejected with HTTP {status}")]
    LogoutRejected { url: String, status: StatusCode },
}

/// Operator hint for the status codes the REST API uses to reject requests.
fn status_hint(status: &StatusCode) -> &'static str {
    match *status {
        StatusCode::BAD_REQUEST => " (bad request syntax)",
        StatusCode::UNAUTHORIZED => " (wrong credentials / unauthorized)",
        _ => "",
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
