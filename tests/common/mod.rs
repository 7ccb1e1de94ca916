#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{ header, HeaderMap, StatusCode },
    routing::post,
    Router,
};
use finbot_relay::config::RelayConfig;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use url::Url;

pub const TOKEN: &str = "dGVzdDpzZWNyZXQ=";

#[derive(Clone, Debug)]
pub struct Captured {
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    received: Arc<Mutex<Vec<Captured>>>,
}

/// Stand-in for the inference endpoint that records every request it sees.
pub struct MockBackend {
    pub url: Url,
    pub received: Arc<Mutex<Vec<Captured>>>,
}

impl MockBackend {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: StatusCode, body: &'static str, delay: Duration) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { status, body, delay, received: received.clone() };
        let app = Router::new().route("/", post(record)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: Url::parse(&format!("http://{}/", addr)).unwrap(),
            received,
        }
    }

    pub fn config(&self) -> RelayConfig {
        config_for(self.url.clone(), Duration::from_secs(5))
    }

    pub async fn requests(&self) -> Vec<Captured> {
        self.received.lock().await.clone()
    }
}

async fn record(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.received.lock().await.push(Captured { headers, body });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, [(header::CONTENT_TYPE, "application/json")], state.body)
}

pub fn config_for(endpoint: Url, timeout: Duration) -> RelayConfig {
    RelayConfig::new(endpoint, TOKEN, timeout).unwrap()
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
