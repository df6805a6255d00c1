//! Power supply and fan check.

use std::io::Write;

use aruba_cx_core::{run_check, ClientOptions, ConnectionConfig, EvaluationResult};

use crate::cli::SystemArgs;
use crate::error::CliError;
use crate::output::ResultPrinter;

/// Run the system command
pub async fn run_system(
    args: SystemArgs,
    config: &ConnectionConfig,
    options: &ClientOptions,
    printer: &mut ResultPrinter<impl Write>,
) -> Result<EvaluationResult, CliError> {
    let mode = args.query_mode();
    tracing::debug!(host = %config.host, part = ?args.part, "checking chassis components");

    let result = run_check(config, options, &mode, |outcome| printer.print_outcome(outcome)).await?;
    Ok(result)
}
