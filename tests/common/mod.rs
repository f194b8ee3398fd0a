//! Mock upstream server for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

/// A request the mock upstream received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    extra_headers: Vec<(&'static str, &'static str)>,
    delay: Duration,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Upstream stub answering every POST on `path` with a canned response.
pub struct MockUpstream {
    addr: SocketAddr,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        Self::start_with_headers(path, status, body, Vec::new()).await
    }

    pub async fn start_with_headers(
        path: &str,
        status: StatusCode,
        body: impl Into<String>,
        extra_headers: Vec<(&'static str, &'static str)>,
    ) -> Self {
        Self::spawn(path, status, body.into(), extra_headers, Duration::ZERO).await
    }

    /// Like [`MockUpstream::start`], but holds every response for `delay`.
    pub async fn start_delayed(
        path: &str,
        status: StatusCode,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self::spawn(path, status, body.into(), Vec::new(), delay).await
    }

    async fn spawn(
        path: &str,
        status: StatusCode,
        body: String,
        extra_headers: Vec<(&'static str, &'static str)>,
        delay: Duration,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            status,
            body,
            extra_headers,
            delay,
            recorded: recorded.clone(),
        };

        let app = Router::new().route(path, post(respond)).with_state(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            recorded,
            _handle: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    let body_json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.recorded.lock().unwrap().push(RecordedRequest {
        headers,
        body: body_json,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let mut response = (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
        .into_response();
    for (name, value) in &state.extra_headers {
        response
            .headers_mut()
            .insert(*name, value.parse().unwrap());
    }
    response
}

/// An address nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
