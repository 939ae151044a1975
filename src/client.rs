//! Registry service client bound to one regional endpoint

use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Remote-procedure surface of one regional registry instance.
///
/// The probers depend on this trait rather than the HTTP implementation so
/// they can run against in-memory stubs in tests.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Store a username in the region's registry. The registry deduplicates
    /// by key, so re-registering an existing username overwrites it.
    async fn register(&self, username: &str) -> Result<()>;

    /// Fetch all usernames currently stored in the region. No ordering is
    /// guaranteed; callers must treat the result as a set.
    async fn list(&self) -> Result<Vec<String>>;

    /// Delete all usernames in the region. Idempotent.
    async fn clear(&self) -> Result<()>;
}

/// `POST /register` request body
#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
}

/// `GET /list` response body
#[derive(Debug, Deserialize)]
struct ListResponse {
    users: Vec<String>,
}

/// HTTP-backed registry client.
///
/// One instance is bound to one region endpoint for the harness's lifetime.
/// Every call is a single round trip: no caching, no retries, and no timeout
/// handling beyond the transport default configured at construction.
pub struct HttpRegistryClient {
    base_url: Url,
    http: Client,
}

impl HttpRegistryClient {
    /// Create a client for one region endpoint with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("Invalid region endpoint '{}': {}", base_url, e)))?;

        // Url::join drops a non-slash-terminated final path segment, which
        // would silently redirect every operation to the host root.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    /// Endpoint this client is bound to
    pub fn endpoint(&self) -> &str {
        self.base_url.as_str()
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::parse(format!("Invalid path '{}': {}", path, e)))
    }

    /// Map a response to success or `RequestFailed`, capturing the body of
    /// any non-success status for diagnostics.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::request_failed(status.as_u16(), body))
        }
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn register(&self, username: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url_for("register")?)
            .json(&RegisterRequest { username })
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        let response = self.http.get(self.url_for("list")?).send().await?;
        let response = Self::check_status(response).await?;

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| AppError::parse(format!("Invalid /list response: {}", e)))?;

        Ok(body.users)
    }

    async fn clear(&self) -> Result<()> {
        let response = self
            .http
            .post(self.url_for("clear")?)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }
}
