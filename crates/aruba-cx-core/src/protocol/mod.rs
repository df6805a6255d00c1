//! REST API wire format for the CX switch.
//!
//! Endpoint builders and the JSON documents a check reads.

pub mod endpoints;
pub mod types;
