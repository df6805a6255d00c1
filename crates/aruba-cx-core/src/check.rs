//! One check run: login, query, evaluate, logout.

use crate::config::{ClientOptions, ConnectionConfig, DeviceEndpoint};
use crate::device::{build_client, fetch_interface, fetch_parts, Session};
use crate::error::CoreError;
use crate::health::{evaluate_interface, evaluate_part_set, EvaluationResult};
use crate::protocol::endpoints::PART_API_VERSION;
use crate::protocol::types::PartClass;

/// What a check run inspects. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    Interface {
        name: String,
        expect_down: bool,
        include_statistics: bool,
    },
    System {
        part: PartClass,
        /// API version of the chassis collection path
        api_version: String,
    },
}

impl QueryMode {
    /// System query at the pinned collection version.
    pub fn system(part: PartClass) -> Self {
        QueryMode::System {
            part,
            api_version: PART_API_VERSION.to_string(),
        }
    }
}

/// Outcome of the query phase, handed to the caller before logout.
pub type CheckOutcome = Result<EvaluationResult, CoreError>;

/// Run a check against the switch described by `config` over HTTPS.
pub async fn run_check<F>(
    config: &ConnectionConfig,
    options: &ClientOptions,
    mode: &QueryMode,
    report: F,
) -> CheckOutcome
where
    F: FnOnce(&CheckOutcome),
{
    run_check_at(
        &config.endpoint(),
        &config.username,
        &config.password,
        options,
        mode,
        report,
    )
    .await
}

/// Run a check against explicit URL roots.
///
/// Once login succeeds, `report` receives the query outcome and the session
/// is then logged out exactly once, whether the query succeeded or not. A
/// slow logout therefore never delays the verdict. A failed logout is logged
/// and never replaces the outcome. `report` is not called when login fails.
pub async fn run_check_at<F>(
    endpoint: &DeviceEndpoint,
    username: &str,
    password: &str,
    options: &ClientOptions,
    mode: &QueryMode,
    report: F,
) -> CheckOutcome
where
    F: FnOnce(&CheckOutcome),
{
    let client = build_client(options)?;
    let session = Session::open(&client, endpoint.api_root(), username, password).await?;

    let outcome = query_and_evaluate(&session, endpoint, mode).await;
    report(&outcome);

    if let Err(e) = session.close().await {
        tracing::warn!("logout failed: {}", e);
    }

    outcome
}

async fn query_and_evaluate(
    session: &Session,
    endpoint: &DeviceEndpoint,
    mode: &QueryMode,
) -> Result<EvaluationResult, CoreError> {
    match mode {
        QueryMode::Interface {
            name,
            expect_down,
            include_statistics,
        } => {
            let snapshot = fetch_interface(session, name).await?;
            tracing::debug!(interface = %snapshot.name, link_state = ?snapshot.link_state, "interface read");
            Ok(evaluate_interface(&snapshot, *expect_down, *include_statistics))
        }
        QueryMode::System { part, api_version } => {
            let snapshots = fetch_parts(session, endpoint.base(), api_version, *part).await?;
            Ok(evaluate_part_set(&snapshots, *part))
        }
    }
}
