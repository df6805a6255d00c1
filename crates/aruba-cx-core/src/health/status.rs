//! Monitoring states and check results.

use std::fmt;

/// Service state in the usual monitoring plugin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    /// Part of the convention, never produced by these checks
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub state: ServiceState,
    /// Summary text shown by the monitoring system
    pub message: String,
    /// Detail appended after `|`
    pub perf_data: Option<String>,
}

impl EvaluationResult {
    pub fn new(state: ServiceState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
            perf_data: None,
        }
    }

    /// Attach performance data. Empty data is ignored.
    pub fn with_perf_data(mut self, perf_data: String) -> Self {
        if !perf_data.is_empty() {
            self.perf_data = Some(perf_data);
        }
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.perf_data {
            Some(perf) => write!(f, "{} | {}", self.message, perf),
            None => write!(f, "{}", self.message),
        }
    }
}
