//! URL builders for the CX REST API.

use reqwest::Url;

use crate::error::CoreError;
use crate::protocol::types::PartClass;

/// API version the chassis subsystem collections are read from.
///
/// Independent of the version given on the command line: the collections
/// are only known to be exposed at this path on current firmware.
pub const PART_API_VERSION: &str = "v10.09";

/// Attributes requested for an interface read.
pub const INTERFACE_ATTRIBUTES: &str = "name,description,link_state,rate_statistics";

/// URL builders for the REST resources a check touches
pub struct Endpoints;

impl Endpoints {
    /// `POST {apiRoot}/login`
    pub fn login(api_root: &str) -> String {
        format!("{}/login", api_root)
    }

    /// `POST {apiRoot}/logout`
    pub fn logout(api_root: &str) -> String {
        format!("{}/logout", api_root)
    }

    /// `GET {apiRoot}/system/interfaces/{name}`
    ///
    /// The name is encoded as a single path segment, so `1/1/1` becomes `1%2F1%2F1`.
    /// `.` and `..` are rejected: URL normalization would drop them and the
    /// request would land on the interface collection instead.
    pub fn interface(api_root: &str, name: &str) -> Result<Url, CoreError> {
        if is_dot_segment(name) {
            return Err(CoreError::Url(format!(
                "interface name '{}' is not a valid path segment",
                name
            )));
        }

        let mut url =
            Url::parse(api_root).map_err(|e| CoreError::Url(format!("{}: {}", api_root, e)))?;
        url.path_segments_mut()
            .map_err(|_| CoreError::Url(format!("{} cannot be a base URL", api_root)))?
            .pop_if_empty()
            .extend(["system", "interfaces", name]);
        Ok(url)
    }

    /// `GET {base}/rest/{version}/system/subsystems/chassis,1/{power_supplies|fans}`
    pub fn part_collection(base: &str, api_version: &str, class: PartClass) -> String {
        format!(
            "{}/rest/{}/system/subsystems/chassis,1/{}",
            base,
            api_version,
            class.collection()
        )
    }

    /// Resolve a collection entry (a path relative to the host) against the base URL.
    pub fn part_instance(base: &str, relative_path: &str) -> String {
        if relative_path.starts_with('/') {
            format!("{}{}", base, relative_path)
        } else {
            format!("{}/{}", base, relative_path)
        }
    }
}

/// `.` and `..` cannot be sent as a path segment.
pub fn is_dot_segment(name: &str) -> bool {
    name == "." || name == ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let root = "https://sw1/rest/v10.09";
        assert_eq!(Endpoints::login(root), "https://sw1/rest/v10.09/login");
        assert_eq!(Endpoints::logout(root), "https://sw1/rest/v10.09/logout");
    }

    #[test]
    fn test_interface_name_is_single_segment() {
        let url = Endpoints::interface("https://sw1/rest/v10.09", "1/1/1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sw1/rest/v10.09/system/interfaces/1%2F1%2F1"
        );
    }

    #[test]
    fn test_interface_name_with_space() {
        let url = Endpoints::interface("https://sw1/rest/v10.09", "vlan 10").unwrap();
        assert!(url.as_str().ends_with("/system/interfaces/vlan%2010"));
    }

    #[test]
    fn test_interface_dot_segments_rejected() {
        for name in [".", ".."] {
            let result = Endpoints::interface("https://sw1/rest/v10.09", name);
            assert!(matches!(result, Err(CoreError::Url(_))), "{} accepted", name);
        }
        assert!(Endpoints::interface("https://sw1/rest/v10.09", "...").is_ok());
    }

    #[test]
    fn test_interface_invalid_root() {
        assert!(Endpoints::interface("not a url", "1/1/1").is_err());
    }

    #[test]
    fn test_part_collection_paths() {
        assert_eq!(
            Endpoints::part_collection("https://sw1", PART_API_VERSION, PartClass::PowerSupply),
            "https://sw1/rest/v10.09/system/subsystems/chassis,1/power_supplies"
        );
        assert_eq!(
            Endpoints::part_collection("https://sw1", PART_API_VERSION, PartClass::Fan),
            "https://sw1/rest/v10.09/system/subsystems/chassis,1/fans"
        );
    }

    #[test]
    fn test_part_instance() {
        assert_eq!(
            Endpoints::part_instance("https://sw1", "/rest/v10.09/system/subsystems/chassis,1/fans/1%2F1"),
            "https://sw1/rest/v10.09/system/subsystems/chassis,1/fans/1%2F1"
        );
        assert_eq!(
            Endpoints::part_instance("https://sw1", "rest/x"),
            "https://sw1/rest/x"
        );
    }
}
