//! Test helpers for integration tests
//!
//! Provides a server spawned on an ephemeral port, request shorthands and
//! token minting for test callers.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tally_api::{create_app, create_app_state, serve, AppState};
use tally_common::{AppConfig, Principal};
use tally_core::UserId;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    _handle: JoinHandle<()>,
}

/// A caller with a signed access token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub principal: Principal,
    pub token: String,
}

impl TestServer {
    /// Start a server over a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with(|_| None).await
    }

    /// Start a server with extra configuration keys layered over the defaults
    pub async fn start_with<F>(overrides: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = test_config(overrides)?;
        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for an `/api/v1` path
    pub fn api(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    /// Mint a token for a new, unique user
    pub fn user(&self) -> Result<TestUser> {
        let suffix = unique_suffix();
        let principal = Principal {
            user_id: UserId::generate(),
            username: format!("writer{suffix}"),
            email: format!("writer{suffix}@example.com"),
        };
        let token = self.state.jwt_service().sign(&principal)?;
        Ok(TestUser { principal, token })
    }

    /// Mint a token that is already past its expiry
    pub fn expired_token(&self) -> Result<String> {
        let user = self.user()?;
        Ok(self
            .state
            .jwt_service()
            .sign_with_ttl(&user.principal, -120)?)
    }

    /// GET an absolute URL
    pub async fn get(&self, url: &str) -> Result<Response> {
        Ok(self.client.get(url).send().await?)
    }

    /// GET an `/api/v1` path
    pub async fn get_api(&self, path: &str, user: Option<&TestUser>) -> Result<Response> {
        send(with_auth(self.client.get(self.api(path)), user)).await
    }

    /// POST JSON to an `/api/v1` path
    pub async fn post_api<T: Serialize>(
        &self,
        path: &str,
        user: Option<&TestUser>,
        body: &T,
    ) -> Result<Response> {
        send(with_auth(self.client.post(self.api(path)), user).json(body)).await
    }

    /// PUT to an `/api/v1` path with an optional JSON body
    pub async fn put_api<T: Serialize>(
        &self,
        path: &str,
        user: Option<&TestUser>,
        body: Option<&T>,
    ) -> Result<Response> {
        let request = with_auth(self.client.put(self.api(path)), user);
        match body {
            Some(body) => send(request.json(body)).await,
            None => send(request).await,
        }
    }

    /// DELETE an `/api/v1` path
    pub async fn delete_api(&self, path: &str, user: Option<&TestUser>) -> Result<Response> {
        send(with_auth(self.client.delete(self.api(path)), user)).await
    }
}

fn with_auth(request: RequestBuilder, user: Option<&TestUser>) -> RequestBuilder {
    match user {
        Some(user) => request.bearer_auth(&user.token),
        None => request,
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    Ok(request.send().await?)
}

/// Configuration for an in-memory server, with `overrides` consulted first
pub fn test_config<F>(overrides: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    AppConfig::from_lookup(|key| {
        overrides(key).or_else(|| match key {
            "API_PORT" => Some("0".to_string()),
            "JWT_SECRET" => Some("integration-test-secret".to_string()),
            "STORAGE_BACKEND" => Some("memory".to_string()),
            _ => None,
        })
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}
