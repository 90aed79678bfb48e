//! Common test utilities - ContestTest harness for end-to-end testing

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use contestd::advisor::AdvisoryPolicy;
use contestd::config::{AdvisorConfig, BrandConfig};
use contestd::{Config, Server};
use reqwest::Client;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Advisory reply served by the stub
pub const STUB_SUGGESTION: &str = "Use bright colors and a summer vibe.";

/// How the stub upstream behaves
#[derive(Debug, Clone, Copy)]
pub struct StubBehavior {
    /// Advisory endpoint answers 200 (otherwise 500)
    pub advisor_ok: bool,
}

/// Fake brand metadata + advisory services on a random port
pub struct StubUpstream {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl StubUpstream {
    pub async fn start(behavior: StubBehavior) -> Result<Self> {
        let router = Router::new()
            .route("/brands/{domain}", get(stub_brand))
            .route("/chat/completions", post(stub_chat))
            .with_state(behavior);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn stub_brand(Path(domain): Path<String>) -> impl IntoResponse {
    match domain.as_str() {
        "exampleshop.com" => (
            StatusCode::OK,
            Json(serde_json::json!({
                "name": "Example Shop",
                "brandColors": [{"hex": "#112233"}, {"hex": "#445566"}, {"hex": "#778899"}, {"hex": "#000000"}],
                "logos": [
                    {"formats": [{"src": "https://cdn.example/logo.svg", "format": "svg"}]},
                    {"formats": [{"src": "https://cdn.example/logo.png", "format": "png"}]}
                ],
                "industry": "Fashion"
            })),
        )
            .into_response(),
        "garbage.com" => (StatusCode::OK, "not json").into_response(),
        "broken.com" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_chat(State(behavior): State<StubBehavior>) -> impl IntoResponse {
    if behavior.advisor_ok {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": STUB_SUGGESTION}}]
            })),
        )
            .into_response()
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
    }
}

/// Test harness that spawns a real contestd server on a random port
pub struct ContestTest {
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
    _upstream: StubUpstream,
    _handle: JoinHandle<()>,
}

impl ContestTest {
    /// Start with a working upstream and the given advisory policy
    pub async fn start(policy: AdvisoryPolicy) -> Result<Self> {
        Self::start_with(policy, StubBehavior { advisor_ok: true }).await
    }

    /// Start a new test server instance against a stub upstream
    pub async fn start_with(policy: AdvisoryPolicy, behavior: StubBehavior) -> Result<Self> {
        let upstream = StubUpstream::start(behavior).await?;

        // Find a random available port
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let config = Config {
            bind_addr: addr,
            brand: BrandConfig {
                api_url: upstream.base_url(),
                api_key: Some("test-brand-key".to_string()),
                timeout_secs: 2,
            },
            advisor: AdvisorConfig {
                api_url: upstream.base_url(),
                api_key: Some("test-llm-key".to_string()),
                timeout_secs: 2,
                policy,
                ..AdvisorConfig::default()
            },
        };

        let server = Arc::new(Server::new(config)?);
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        // Poll until server is ready (max 2 seconds)
        let mut ready = false;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
        }

        if !ready {
            panic!("Server failed to start within 2 seconds");
        }

        Ok(Self {
            addr,
            client,
            server,
            _upstream: upstream,
            _handle: handle,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// POST a generation request and return status plus JSON body
    pub async fn generate(&self, config: serde_json::Value) -> Result<(u16, serde_json::Value)> {
        let response = self
            .client
            .post(format!("{}/generate-game", self.base_url()))
            .json(&serde_json::json!({ "config": config }))
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Shutdown the server gracefully
    pub fn shutdown(&self) {
        self.server.shutdown();
    }
}

impl Drop for ContestTest {
    fn drop(&mut self) {
        self.shutdown();
    }
}
