//! HTTP client for the authorization backend

use serde::Serialize;

use crate::config::api_base;

use super::types::{AuthResponse, GenerateRequest, VerifyRequest};

/// Error type for backend calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the two-endpoint authorization contract
#[derive(Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base: String,
}

impl AuthClient {
    /// Create a client against an explicit base URL
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Create a client against the configured base URL
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    /// Request a new one-time code for the given contact info
    pub async fn generate(&self, request: &GenerateRequest) -> Result<AuthResponse, ApiError> {
        self.post("/authorized/generate", request).await
    }

    /// Submit a typed code for verification
    pub async fn verify(&self, request: &VerifyRequest) -> Result<AuthResponse, ApiError> {
        self.post("/authorized/verify", request).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{}", self.base, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%url, %status, "backend rejected request");
            return Err(ApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}
