//! HTTP client for the mood journal API, built on [`reqwest`].
//!
//! Every response has its `Content-Type` checked before the body is decoded,
//! so an HTML error page from a proxy is reported as an infrastructure
//! failure rather than being mistaken for an application error.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::dto::{ErrorResponse, HealthResponse};
use crate::models::mood::{CreateMoodRequest, MoodEntry};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request with a JSON error body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A non-2xx response whose body is not JSON.
    #[error("Server returned non-JSON response. (Likely proxy or server error page)")]
    NonJson { status: u16 },

    /// A 2xx response whose body is not JSON.
    #[error("Server returned non-JSON response on success.")]
    NonJsonSuccess { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True for failures outside the application itself.
    pub fn is_infrastructure(&self) -> bool {
        !matches!(self, ClientError::Api { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. }
            | ClientError::NonJson { status }
            | ClientError::NonJsonSuccess { status } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// * `base_url` - scheme and authority of the API, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.http.get(self.url("/api/health")).send().await?;
        Self::parse_response(response).await
    }

    /// GET /api/moods, newest first.
    pub async fn list_moods(&self) -> Result<Vec<MoodEntry>, ClientError> {
        let response = self.http.get(self.url("/api/moods")).send().await?;
        Self::parse_response(response).await
    }

    /// POST /api/moods. Returns the stored entry.
    pub async fn create_mood(&self, request: &CreateMoodRequest) -> Result<MoodEntry, ClientError> {
        let response = self
            .http
            .post(self.url("/api/moods"))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let raw = response.text().await?;
        decode_response(status, is_json, &raw)
    }
}

fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    is_json: bool,
    raw: &str,
) -> Result<T, ClientError> {
    if !status.is_success() {
        if !is_json {
            return Err(ClientError::NonJson {
                status: status.as_u16(),
            });
        }
        let message = serde_json::from_str::<ErrorResponse>(raw)
            .ok()
            .map(|body| body.error)
            .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if !is_json {
        return Err(ClientError::NonJsonSuccess {
            status: status.as_u16(),
        });
    }

    Ok(serde_json::from_str(raw)?)
}
