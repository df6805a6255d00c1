//! Device communication layer.
//!
//! Provides the HTTP client, the authenticated session and the read queries.

pub mod client;
pub mod query;
pub mod session;

pub use client::build_client;
pub use query::{fetch_interface, fetch_parts};
pub use session::Session;
