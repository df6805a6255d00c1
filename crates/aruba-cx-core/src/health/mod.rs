//! Status evaluation.
//!
//! Pure mapping from fetched snapshots to a monitoring state and message.

pub mod interface;
pub mod parts;
pub mod status;

pub use interface::{evaluate_interface, format_rate_statistics};
pub use parts::evaluate_part_set;
pub use status::{EvaluationResult, ServiceState};
