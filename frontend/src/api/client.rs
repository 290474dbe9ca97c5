use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{api::types::*, config};

/// Transport-level failures, collapsed into [`ApiError`] before they leave the client.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        let message = error.to_string();
        match error {
            FetchError::Request(_) => ApiError::request_failed(message),
            FetchError::Status { status, .. } => ApiError::http_status(status, message),
            FetchError::Decode(_) => ApiError::decode_failed(message),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    user_path: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            user_path: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            user_path: None,
        }
    }

    pub fn with_user_path(mut self, user_path: impl Into<String>) -> Self {
        self.user_path = Some(config::normalize_path(&user_path.into()));
        self
    }

    async fn current_user_url(&self) -> String {
        match &self.base_url {
            Some(base) => {
                let path = self
                    .user_path
                    .clone()
                    .unwrap_or_else(|| config::DEFAULT_USER_PATH.to_string());
                format!("{}{}", base, path)
            }
            None => {
                let settings = config::await_settings().await;
                let path = self.user_path.as_ref().unwrap_or(&settings.user_path);
                format!("{}{}", settings.api_base_url, path)
            }
        }
    }

    pub async fn get_current_user(&self) -> Result<UserResponse, ApiError> {
        let url = self.current_user_url().await;
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()).into())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message_from_body(status.as_u16(), &body),
            }
            .into())
        }
    }
}

/// Prefers the `error` (or `message`) string of a JSON error body, otherwise `HTTP <status>`.
pub(crate) fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}
