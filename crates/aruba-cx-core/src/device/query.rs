//! Read queries against an open session.

use reqwest::RequestBuilder;
use serde_json::Value;

use crate::device::session::Session;
use crate::error::{CoreError, QueryError};
use crate::protocol::endpoints::{Endpoints, INTERFACE_ATTRIBUTES};
use crate::protocol::types::{parse_part_collection, InterfaceSnapshot, PartClass, PartSnapshot};

/// Read name, description, link state and rate statistics of one interface.
pub async fn fetch_interface(session: &Session, name: &str) -> Result<InterfaceSnapshot, CoreError> {
    let url = Endpoints::interface(session.api_root(), name)?;
    let request = session
        .client()
        .get(url.clone())
        .query(&[("attributes", INTERFACE_ATTRIBUTES)]);

    let body = send_for_json(request, url.as_str()).await?;

    InterfaceSnapshot::from_json(body, name).map_err(|e| {
        QueryError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Read every instance of a component class.
///
/// Lists the collection at `{base}/rest/{api_version}/system/subsystems/chassis,1/...`
/// and then reads each instance in turn. The first failing read aborts the
/// whole query.
pub async fn fetch_parts(
    session: &Session,
    base: &str,
    api_version: &str,
    class: PartClass,
) -> Result<Vec<PartSnapshot>, CoreError> {
    let collection_url = Endpoints::part_collection(base, api_version, class);
    let body = send_for_json(session.client().get(&collection_url), &collection_url).await?;

    let entries = parse_part_collection(body).map_err(|e| QueryError::InvalidResponse {
        url: collection_url.clone(),
        message: e.to_string(),
    })?;
    tracing::debug!(count = entries.len(), class = class.collection(), "collection listed");

    let mut parts = Vec::with_capacity(entries.len());
    for (name, path) in entries {
        let url = Endpoints::part_instance(base, &path);
        let body = send_for_json(session.client().get(&url), &url).await?;

        let part = PartSnapshot::from_json(&name, body, class)
            .map_err(|e| QueryError::InvalidResponse {
                url: url.clone(),
                message: e.to_string(),
            })?;
        parts.push(part);
    }

    Ok(parts)
}

/// Send a read request and decode a JSON body, mapping non-2xx to `QueryError`.
async fn send_for_json(request: RequestBuilder, url: &str) -> Result<Value, CoreError> {
    tracing::debug!(%url, "GET");
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(QueryError::Status {
            url: url.to_string(),
            status,
        }
        .into());
    }

    response.json::<Value>().await.map_err(|e| {
        QueryError::InvalidResponse {
            url: url.to_string(),
            message: format!("Failed to parse JSON: {}", e),
        }
        .into()
    })
}

