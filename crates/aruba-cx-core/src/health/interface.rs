//! Interface link state evaluation.

use super::status::{EvaluationResult, ServiceState};
use crate::protocol::types::{InterfaceSnapshot, LinkState};

/// Classify an interface against the expected link state.
///
/// | link  | expect_down | state    |
/// |-------|-------------|----------|
/// | up    | false       | OK       |
/// | up    | true        | CRITICAL |
/// | down  | true        | OK       |
/// | down  | false       | CRITICAL |
/// | other | any         | UNKNOWN  |
pub fn evaluate_interface(
    snapshot: &InterfaceSnapshot,
    expect_down: bool,
    include_statistics: bool,
) -> EvaluationResult {
    let (state, summary) = match (&snapshot.link_state, expect_down) {
        (LinkState::Up, false) => (ServiceState::Ok, "Interface is up"),
        (LinkState::Up, true) => (ServiceState::Critical, "Interface should not be up"),
        (LinkState::Down, true) => (ServiceState::Ok, "Interface is down"),
        (LinkState::Down, false) => (ServiceState::Critical, "Interface should not be down"),
        (LinkState::Other(_), _) => (ServiceState::Unknown, "Interface is in an unknown state"),
    };

    let message = format!("{} - {} - {}", state.as_str(), summary, snapshot.description);
    let result = EvaluationResult::new(state, message);

    if include_statistics {
        result.with_perf_data(format_rate_statistics(&snapshot.rate_statistics))
    } else {
        result
    }
}

/// Render rate counters as `name - value` lines, rounded to two decimals.
pub fn format_rate_statistics(counters: &[(String, f64)]) -> String {
    counters
        .iter()
        .map(|(name, value)| format!("{} - {:.2}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
