//! Aruba CX core - shared library for switch health checks.
//!
//! Talks to the switch REST API over HTTPS: opens a login session, reads
//! one interface or one class of chassis components, and maps the result
//! to a monitoring state.

pub mod check;
pub mod config;
pub mod device;
pub mod error;
pub mod health;
pub mod protocol;

pub use check::{run_check, run_check_at, CheckOutcome, QueryMode};
pub use config::{ClientOptions, ConnectionConfig, DeviceEndpoint};
pub use error::CoreError;
pub use health::{EvaluationResult, ServiceState};
pub use protocol::types::PartClass;
