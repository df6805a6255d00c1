//! Chassis component evaluation.

use super::status::{EvaluationResult, ServiceState};
use crate::protocol::types::{PartClass, PartSnapshot};

/// Classify a set of component instances.
///
/// The check is CRITICAL only when no instance reports `ok`; a single
/// healthy power supply or fan is enough for OK. An empty set is CRITICAL.
pub fn evaluate_part_set(snapshots: &[PartSnapshot], class: PartClass) -> EvaluationResult {
    let any_ok = snapshots.iter().any(PartSnapshot::is_ok);

    let (state, header) = match (class, any_ok) {
        (PartClass::PowerSupply, true) => (ServiceState::Ok, "All PSUs OK"),
        (PartClass::PowerSupply, false) => (ServiceState::Critical, "PSU not OK"),
        (PartClass::Fan, true) => (ServiceState::Ok, "All fans OK"),
        (PartClass::Fan, false) => (ServiceState::Critical, "Fan not OK"),
    };

    let details = snapshots
        .iter()
        .map(|part| match class {
            PartClass::PowerSupply => format!(
                "{} - {} - {}",
                part.name,
                part.description.as_deref().unwrap_or("unknown"),
                part.status
            ),
            PartClass::Fan => format!("{} - {}", part.name, part.status),
        })
        .collect::<Vec<_>>()
        .join("\n");

    EvaluationResult::new(state, header).with_perf_data(details)
}
