//! Interface link state check.

use std::io::Write;

use aruba_cx_core::{run_check, ClientOptions, ConnectionConfig, EvaluationResult};

use crate::cli::InterfaceArgs;
use crate::error::CliError;
use crate::output::ResultPrinter;

/// Run the interface command
pub async fn run_interface(
    args: InterfaceArgs,
    config: &ConnectionConfig,
    options: &ClientOptions,
    printer: &mut ResultPrinter<impl Write>,
) -> Result<EvaluationResult, CliError> {
    let mode = args.query_mode()?;
    tracing::debug!(host = %config.host, interface = %args.name, "checking interface");

    let result = run_check(config, options, &mode, |outcome| printer.print_outcome(outcome)).await?;
    Ok(result)
}
