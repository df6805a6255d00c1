//! Error types for the Aruba CX check.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use aruba_cx_core::error::CoreError;
use thiserror::Error;

/// Exit codes set outside of a check verdict, following the monitoring plugin convention
pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const UNKNOWN: i32 = 3;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Get the exit code for this error.
    ///
    /// A check that cannot reach a verdict reports UNKNOWN, never CRITICAL,
    /// so failures of the check itself stay apart from a failed switch.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => exit_codes::UNKNOWN,
            CliError::InvalidArgument(_) => exit_codes::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aruba_cx_core::error::QueryError;

    #[test]
    fn test_errors_map_to_unknown() {
        let err = CliError::InvalidArgument("host cannot be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::UNKNOWN);

        let err: CliError = CoreError::from(QueryError::InvalidResponse {
            url: "https://sw1/rest/v10.09/system/interfaces/1%2F1%2F1".to_string(),
            message: "expected value".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), exit_codes::UNKNOWN);
        assert!(err.to_string().starts_with("Query error"));
    }
}
