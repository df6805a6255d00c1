//! In-process fake of the CX REST API for integration tests.
//!
//! Serves canned responses over plain HTTP and records every request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target including the query string
    pub target: String,
    pub cookie: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }
}

type Routes = HashMap<(String, String), (u16, String)>;

#[derive(Clone)]
struct SwitchState {
    routes: Arc<Routes>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeSwitch {
    routes: Routes,
}

impl FakeSwitch {
    /// A switch that accepts login and logout on `api_version`.
    pub fn new(api_version: &str) -> Self {
        let mut switch = Self {
            routes: HashMap::new(),
        };
        switch
            .route("POST", &format!("/rest/{}/login", api_version), 200, "")
            .route("POST", &format!("/rest/{}/logout", api_version), 200, "");
        switch
    }

    pub fn route(&mut self, method: &str, path: &str, status: u16, body: &str) -> &mut Self {
        self.routes
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Bind to an ephemeral port and start serving.
    pub async fn start(&self) -> RunningSwitch {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = SwitchState {
            routes: Arc::new(self.routes.clone()),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new()
            .route("/rest/{version}/login", post(login))
            .fallback(canned)
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningSwitch {
            base: format!("http://{}", addr),
            requests,
        }
    }
}

pub struct RunningSwitch {
    pub base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RunningSwitch {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path_suffix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path().ends_with(path_suffix))
            .count()
    }
}

/// Login answers like any canned route and sets the session cookie on success.
async fn login(
    State(state): State<SwitchState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut response = respond(&state, &method, &uri, &headers, body);
    if response.status().is_success() {
        response.headers_mut().insert(
            SET_COOKIE,
            HeaderValue::from_static("id=session-token; Path=/"),
        );
    }
    response
}

async fn canned(
    State(state): State<SwitchState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    respond(&state, &method, &uri, &headers, body)
}

/// Record the request and answer from the route table, 404 when unrouted.
fn respond(
    state: &SwitchState,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: String,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.as_str().to_string(),
        target,
        cookie: headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let (status, body) = state
        .routes
        .get(&(method.as_str().to_string(), uri.path().to_string()))
        .cloned()
        .unwrap_or((404, r#"{"message": "not found"}"#.to_string()));

    let status = StatusCode::from_u16(status).unwrap();
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}
