//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use activity_api::{create_app, AppState};
use activity_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use activity_service::ServiceContext;
use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server backed by `ctx` with the default test config
    pub async fn start(ctx: ServiceContext) -> Result<Self> {
        Self::start_with_config(ctx, test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(ctx: ServiceContext, config: AppConfig) -> Result<Self> {
        init_test_tracing();

        let app = create_app(AppState::new(ctx, config));

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with an empty body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    test_config_with(&[])
}

/// Create a test configuration with extra variables
pub fn test_config_with(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .or_else(|| match key {
                "API_HOST" => Some("127.0.0.1".to_string()),
                "API_PORT" => Some("0".to_string()),
                _ => None,
            })
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Install a tracing subscriber once per test binary
pub fn init_test_tracing() {
    // Only the first call can install the global subscriber
    let _ = try_init_tracing_with_config(&TracingConfig::development());
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
