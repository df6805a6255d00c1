//! Connection configuration and REST URL roots.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters needed to reach and authenticate against one switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Hostname or IP address of the switch
    pub host: String,
    /// REST API version segment, e.g. `v10.09`
    pub api_version: String,
    pub username: String,
    pub password: String,
}

impl ConnectionConfig {
    /// URL roots for this switch over HTTPS.
    pub fn endpoint(&self) -> DeviceEndpoint {
        DeviceEndpoint::from_base(format!("https://{}", self.host), &self.api_version)
    }
}

/// HTTP client behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub timeout: Duration,
    /// Skip certificate verification. The CX REST server only presents its
    /// factory self-signed certificate, so this defaults to `true`.
    pub accept_invalid_certs: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
        }
    }
}

/// The two URL prefixes every request is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    base: String,
    api_root: String,
}

impl DeviceEndpoint {
    /// Build from a scheme+host base such as `https://switch.example.com`.
    pub fn from_base(base: impl Into<String>, api_version: &str) -> Self {
        let base: String = base.into();
        let base = base.trim_end_matches('/').to_string();
        let api_root = format!("{}/rest/{}", base, api_version);
        Self { base, api_root }
    }

    /// `https://{host}`
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/rest/{apiVersion}`
    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}
