//! TopTopFootball platform API client
//!
//! Thin passthrough over the remote REST API. Lobbies ("matches"),
//! organizers, tournaments, users, payments and refunds are owned and mutated
//! by the platform; this client moves their JSON through untouched
//! (`serde_json::Value`), attaching the staff bearer token to every call.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Client error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to platform API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("platform API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("platform API returned malformed JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Client for the platform's admin REST API.
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: reqwest::Client,
    base_url: String,
}

impl AdminApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange staff credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        parse_login(body)
    }

    /// Analytics snapshot for the dashboard landing view.
    pub async fn overview(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/analytics/overview").await
    }

    pub async fn list_matches(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/matches").await
    }

    pub async fn get_match(&self, token: &str, id: &str) -> Result<Value, ApiError> {
        self.get(token, &format!("/admin/matches/{id}")).await
    }

    pub async fn list_organizers(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/organizers").await
    }

    pub async fn list_tournaments(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/tournaments").await
    }

    pub async fn list_users(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/users").await
    }

    pub async fn list_payments(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/payments").await
    }

    pub async fn list_refunds(&self, token: &str) -> Result<Value, ApiError> {
        self.get(token, "/admin/refunds").await
    }

    /// Block or unblock a user account.
    ///
    /// The platform historically accepted both "blocked" and "block" for the
    /// same state; this client sends the single vocabulary `blocked`/`active`.
    pub async fn set_user_blocked(
        &self,
        token: &str,
        user_id: &str,
        blocked: bool,
    ) -> Result<Value, ApiError> {
        let status = if blocked { "blocked" } else { "active" };
        let response = self
            .http
            .patch(self.url(&format!("/admin/users/{user_id}/status")))
            .bearer_auth(token)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn get(&self, token: &str, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "fetching from platform API");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "platform API call failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

fn parse_login(body: Value) -> Result<LoginResponse, ApiError> {
    serde_json::from_value(body).map_err(ApiError::Decode)
}
