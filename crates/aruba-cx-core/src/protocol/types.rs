//! Documents returned by the CX REST API and their parsed snapshots.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Reported link state of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Up,
    Down,
    /// Anything else the switch reports, or no value at all
    Other(Option<String>),
}

impl LinkState {
    pub fn from_reported(value: Option<&str>) -> Self {
        match value {
            Some("up") => LinkState::Up,
            Some("down") => LinkState::Down,
            other => LinkState::Other(other.map(str::to_string)),
        }
    }
}

/// Raw interface document as returned with
/// `?attributes=name,description,link_state,rate_statistics`.
#[derive(Debug, Deserialize)]
struct RawInterface {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link_state: Option<String>,
    #[serde(default)]
    rate_statistics: Option<Map<String, Value>>,
}

/// State of one interface at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub description: String,
    pub link_state: LinkState,
    /// Rate counters in the order the switch returned them
    pub rate_statistics: Vec<(String, f64)>,
}

impl InterfaceSnapshot {
    /// Parse an interface document. `requested_name` is used when the
    /// document omits its own name.
    pub fn from_json(value: Value, requested_name: &str) -> Result<Self, serde_json::Error> {
        let raw: RawInterface = serde_json::from_value(value)?;

        // Non-numeric counters carry no rate and are dropped
        let rate_statistics = raw
            .rate_statistics
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
            .collect();

        Ok(Self {
            name: raw.name.unwrap_or_else(|| requested_name.to_string()),
            description: raw.description.unwrap_or_default(),
            link_state: LinkState::from_reported(raw.link_state.as_deref()),
            rate_statistics,
        })
    }
}

/// Class of chassis component a system query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartClass {
    PowerSupply,
    Fan,
}

impl PartClass {
    /// Collection name under `system/subsystems/chassis,1/`
    pub fn collection(&self) -> &'static str {
        match self {
            PartClass::PowerSupply => "power_supplies",
            PartClass::Fan => "fans",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartClass::PowerSupply => "PSU",
            PartClass::Fan => "fan",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawIdentity {
    #[serde(default)]
    description: Option<String>,
}

/// Raw per-instance component document.
#[derive(Debug, Deserialize)]
struct RawPart {
    status: String,
    #[serde(default)]
    identity: Option<RawIdentity>,
}

/// Health of one component instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSnapshot {
    /// Collection key, e.g. `1/1`
    pub name: String,
    /// Only kept for power supplies
    pub description: Option<String>,
    /// Health state as reported, compared case-sensitively against `ok`
    pub status: String,
}

impl PartSnapshot {
    pub fn from_json(
        name: &str,
        value: Value,
        class: PartClass,
    ) -> Result<Self, serde_json::Error> {
        let raw: RawPart = serde_json::from_value(value)?;

        let description = match class {
            PartClass::PowerSupply => raw.identity.and_then(|i| i.description),
            PartClass::Fan => None,
        };

        Ok(Self {
            name: name.to_string(),
            description,
            status: raw.status,
        })
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Parse a component collection: instance name to resource path.
pub fn parse_part_collection(value: Value) -> Result<Vec<(String, String)>, serde_json::Error> {
    let map: Map<String, Value> = serde_json::from_value(value)?;
    map.into_iter()
        .map(|(name, path)| {
            let path: String = serde_json::from_value(path)?;
            Ok((name, path))
        })
        .collect()
}
