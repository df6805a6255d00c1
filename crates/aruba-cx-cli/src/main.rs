//! check_aruba_cx - monitoring plugin for Aruba CX switches.
//!
//! Logs in to the switch REST API, checks one interface or all power
//! supplies / fans, prints one status line and exits with the matching
//! monitoring state.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::io::Write;

use aruba_cx_core::EvaluationResult;
use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};
use output::ResultPrinter;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::OK,
                _ => exit_codes::UNKNOWN,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init_tracing(cli.verbose);

    // The result line is written before logout, inside the check
    let mut printer = ResultPrinter::new(std::io::stdout());

    match run(cli, &mut printer).await {
        Ok(result) => std::process::exit(result.exit_code()),
        Err(e) => {
            tracing::error!("check failed: {}", e);
            printer.print_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(
    cli: Cli,
    printer: &mut ResultPrinter<impl Write>,
) -> Result<EvaluationResult, CliError> {
    let config = cli.connection_config()?;
    let options = cli.client_options()?;

    match cli.command {
        Commands::Interface(args) => {
            commands::run_interface(args, &config, &options, printer).await
        }
        Commands::System(args) => commands::run_system(args, &config, &options, printer).await,
    }
}
