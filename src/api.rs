//! Typed REST boundary to the warehouse backend.
//!
//! The engine only ever needs three calls: list a group's racks, poll its
//! live statuses, and push a bulk configuration. They are grouped behind
//! the [`RackApi`] trait so the feed, session, and tests can run against
//! a mock instead of a live server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::HashMap;

use serde::Deserialize;

use grid::model::{ConfigurationRequest, RackLocation, WireStatus};

/// Default backend base URL; override with `RACKBOARD_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },
    #[error("configuration conflict: {0}")]
    Conflict(String),
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The REST surface this subsystem consumes.
#[async_trait::async_trait]
pub trait RackApi: Send + Sync {
    /// All rack locations of one group, unordered.
    async fn list_racks(&self, group_id: &str) -> Result<Vec<RackLocation>, ApiError>;

    /// Live status per location code. Codes missing from the map default
    /// to available downstream.
    async fn poll_status(&self, group_id: &str) -> Result<HashMap<String, WireStatus>, ApiError>;

    /// Assign materials to a set of locations atomically. Idempotent
    /// upsert on the backend side.
    async fn bulk_configure(&self, request: &ConfigurationRequest) -> Result<(), ApiError>;
}

/// Per-code entry of the live-status endpoint: `{"status": "fill"}`.
#[derive(Debug, Deserialize)]
struct StatusEntry {
    status: WireStatus,
}

/// Shape of backend error bodies, when they are JSON at all.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`RackApi`] over HTTP with reqwest.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Create a client against `base_url` (no trailing slash needed).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string(), client: reqwest::Client::new() }
    }

    /// Create a client from `RACKBOARD_BASE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("RACKBOARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(path: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // 409 carries the conflict message the operator needs to see.
        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::CONFLICT {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| "location state changed since selection".to_string());
            return Err(ApiError::Conflict(message));
        }
        Err(ApiError::Status { status: status.as_u16(), path: path.to_string() })
    }
}

#[async_trait::async_trait]
impl RackApi for HttpApi {
    async fn list_racks(&self, group_id: &str) -> Result<Vec<RackLocation>, ApiError> {
        let path = format!("/api/groups/{group_id}/racks");
        let response = self.client.get(self.url(&path)).send().await?;
        let response = Self::check(&path, response).await?;
        Ok(response.json().await?)
    }

    async fn poll_status(&self, group_id: &str) -> Result<HashMap<String, WireStatus>, ApiError> {
        let path = format!("/api/groups/{group_id}/status");
        let response = self.client.get(self.url(&path)).send().await?;
        let response = Self::check(&path, response).await?;
        let entries: HashMap<String, StatusEntry> = response.json().await?;
        Ok(entries.into_iter().map(|(code, entry)| (code, entry.status)).collect())
    }

    async fn bulk_configure(&self, request: &ConfigurationRequest) -> Result<(), ApiError> {
        let path = "/api/locations/bulk-configure";
        let response = self.client.post(self.url(path)).json(request).send().await?;
        Self::check(path, response).await?;
        Ok(())
    }
}
