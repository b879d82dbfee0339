#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use vf_http::config::{Config, DirectoryConfig};
use vf_http::setup::construct_server;
use vf_system::realtime::config::SessionRequest;
use vf_system::realtime::transport::{TransportError, UpstreamRequest, UpstreamResponse, UpstreamTransport};
use vf_system::SessionProxy;

pub enum Reply {
    Respond(StatusCode, &'static str),
    Fail(&'static str),
}

/// Stand-in for the upstream provider, remembering every request it saw.
pub struct FakeUpstream {
    reply: Reply,
    calls: AtomicUsize,
    payloads: Mutex<Vec<SessionRequest>>,
}

impl FakeUpstream {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<SessionRequest> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamTransport for FakeUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(request.body);

        match self.reply {
            Reply::Respond(status, body) => Ok(UpstreamResponse {
                status,
                body: body.to_string(),
            }),
            Reply::Fail(reason) => Err(TransportError::Other(reason.to_string())),
        }
    }
}

/// Build the full application router around the given fake upstream.
pub fn app(static_root: &Path, api_key: Option<&str>, upstream: Arc<FakeUpstream>) -> Router {
    let mut config = Config {
        dirs: DirectoryConfig {
            static_root: static_root.to_path_buf(),
        },
        ..Default::default()
    };
    config.apply_api_key(api_key.map(String::from));

    let proxy = SessionProxy::new(config.realtime.clone(), upstream);

    construct_server(Arc::new(config), Arc::new(proxy))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, headers, body.to_vec())
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
