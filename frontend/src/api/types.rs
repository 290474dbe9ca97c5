use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const HTTP_STATUS: &'static str = "HTTP_STATUS";
    pub const DECODE_FAILED: &'static str = "DECODE_FAILED";

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::HTTP_STATUS.to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn decode_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::DECODE_FAILED.to_string(),
            details: None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|details| details.get("status"))
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }
}
