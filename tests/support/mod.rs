//! Mock gateway setup shared by the integration tests.
#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use speech_gateway_client::SpeechClient;
use std::path::{Path, PathBuf};

pub const GATEWAY_TOKEN: &str = "tok123";

/// A mock gateway plus a client pointed at it.
pub struct GatewayFixture {
    pub server: ServerGuard,
    pub client: SpeechClient,
}

impl GatewayFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = SpeechClient::new(server.url(), GATEWAY_TOKEN);
        Self { server, client }
    }
}

/// Response envelope as the gateway sends it.
pub fn envelope(data: Value, request_id: &str) -> Value {
    json!({
        "data": data,
        "meta": {"requestId": request_id, "shamsiDate": "1402-01-01"}
    })
}

/// Writes `bytes` to `dir/name` and returns the path.
pub fn audio_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write audio fixture");
    path
}

/// Base URL of a local port with nothing listening on it.
pub fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
