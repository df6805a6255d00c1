//! CLI argument definitions using clap.

use std::time::Duration;

use aruba_cx_core::protocol::endpoints::{is_dot_segment, PART_API_VERSION};
use aruba_cx_core::{ClientOptions, ConnectionConfig, PartClass, QueryMode};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::CliError;

/// Check interface, power supply and fan status on Aruba CX switches
#[derive(Parser, Debug)]
#[command(name = "check_aruba_cx")]
#[command(author, about, long_about = None)]
#[command(after_help = "Troubleshooting: 400 error - Bad syntax | 401 - Wrong creds / Unauthorized")]
pub struct Cli {
    /// Hostname or IP of the switch, e.g. switch.company.com or 192.168.1.2
    #[arg(short = 'H', long)]
    pub host: String,

    /// REST API version to use, e.g. v10.09 or v10.04
    #[arg(short = 'v', long = "version")]
    pub api_version: String,

    /// Username to log in to the switch
    #[arg(short, long, env = "ARUBA_CX_USERNAME")]
    pub username: String,

    /// Password to log in to the switch
    #[arg(short, long, env = "ARUBA_CX_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "10", env = "ARUBA_CX_TIMEOUT")]
    pub timeout: u64,

    /// Verify the switch TLS certificate (off by default, the switch serves a self-signed one)
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the link state of one interface
    Interface(InterfaceArgs),

    /// Check power supplies or fans
    System(SystemArgs),
}

// ==================== Interface ====================

#[derive(Args, Debug)]
pub struct InterfaceArgs {
    /// Interface name, e.g. 1/1/1
    #[arg(short, long)]
    pub name: String,

    /// The interface is expected to be down
    #[arg(short, long)]
    pub down: bool,

    /// Append interface rate statistics as performance data
    #[arg(short, long)]
    pub statistics: bool,
}

// ==================== System ====================

#[derive(Args, Debug)]
pub struct SystemArgs {
    /// Component class to check
    #[arg(short, long, value_enum)]
    pub part: PartArg,

    /// API version of the chassis subsystem path
    #[arg(long, default_value = PART_API_VERSION)]
    pub part_api_version: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartArg {
    Psu,
    Fan,
}

impl From<PartArg> for PartClass {
    fn from(arg: PartArg) -> Self {
        match arg {
            PartArg::Psu => PartClass::PowerSupply,
            PartArg::Fan => PartClass::Fan,
        }
    }
}

impl Cli {
    /// Connection parameters, validated before any network activity.
    pub fn connection_config(&self) -> Result<ConnectionConfig, CliError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(CliError::InvalidArgument("host cannot be empty".to_string()));
        }
        if self.api_version.trim().is_empty() {
            return Err(CliError::InvalidArgument(
                "API version cannot be empty".to_string(),
            ));
        }

        Ok(ConnectionConfig {
            host: host.to_string(),
            api_version: self.api_version.trim().to_string(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn client_options(&self) -> Result<ClientOptions, CliError> {
        if self.timeout == 0 {
            return Err(CliError::InvalidArgument(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(ClientOptions {
            timeout: Duration::from_secs(self.timeout),
            accept_invalid_certs: !self.verify_tls,
        })
    }
}

impl InterfaceArgs {
    pub fn query_mode(&self) -> Result<QueryMode, CliError> {
        if self.name.trim().is_empty() {
            return Err(CliError::InvalidArgument(
                "interface name cannot be empty".to_string(),
            ));
        }
        if is_dot_segment(&self.name) {
            return Err(CliError::InvalidArgument(format!(
                "interface name '{}' is not a valid interface",
                self.name
            )));
        }

        Ok(QueryMode::Interface {
            name: self.name.clone(),
            expect_down: self.down,
            include_statistics: self.statistics,
        })
    }
}

impl SystemArgs {
    pub fn query_mode(&self) -> QueryMode {
        QueryMode::System {
            part: self.part.into(),
            api_version: self.part_api_version.clone(),
        }
    }
}
