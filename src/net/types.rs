//! Wire DTOs and errors for the backend JSON API.
//!
//! DESIGN
//! ======
//! Field names mirror what the backend emits. Portfolio rows come straight
//! from the server's storage model and therefore use PascalCase keys, while
//! search/details payloads are snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend API calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credentials or the bearer token (HTTP 401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with a non-success status other than 401.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// An authenticated endpoint was called without a session token.
    #[error("no session token")]
    MissingToken,
}

impl ApiError {
    /// Map a non-success status and its body to an error.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message(body).unwrap_or_else(|| format!("HTTP {status}"));
        if status == 401 {
            Self::Unauthorized(message)
        } else {
            Self::Rejected { status, message }
        }
    }

    /// Whether the session token should be considered stale.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::MissingToken)
    }

    /// Whether re-issuing the same user action may succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Rejected { status: 429 | 500..=599, .. })
    }
}

/// Append a retry suggestion to `message` when `err` is transient.
#[must_use]
pub fn with_retry_hint(mut message: String, err: &ApiError) -> String {
    if err.retryable() {
        if !message.ends_with('.') {
            message.push('.');
        }
        message.push_str(" Try again.");
    }
    message
}

/// Extract a human-readable message from an error body.
///
/// The backend answers errors either as a bare JSON string
/// (`"invalid credentials"`) or as `{"error": "..."}`.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(serde_json::Value::Object(map)) => ["error", "message"]
            .iter()
            .find_map(|k| map.get(*k).and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /login` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned() }
    }
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Result of `POST /signup`. The backend answers with a bare JSON string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupOutcome {
    pub message: String,
}

impl SignupOutcome {
    /// Decode the signup body, accepting a bare string or a `message`/`result` field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not JSON or carries no message.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let message = match value {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Object(map) => ["message", "result"]
                .iter()
                .find_map(|k| map.get(*k).and_then(serde_json::Value::as_str))
                .map(str::to_owned),
            _ => None,
        };
        message
            .map(|message| Self { message })
            .ok_or_else(|| ApiError::Decode("signup response carried no message".to_owned()))
    }
}

/// Identity returned by `GET /me` for a valid token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Me {
    #[serde(default, alias = "user")]
    pub email: String,
}

// =============================================================================
// STOCKS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct AddStockRequest<'a> {
    pub symbol: &'a str,
}

/// One hit from `POST /stock/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSearchResult {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Quote details from `GET /stock/details` and `POST /stock/add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockDetails {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub currency: String,
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub volume: f64,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl StockDetails {
    /// Whether the last move was non-negative.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// A stock held in the user's portfolio, from `GET /stock/list`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioStock {
    #[serde(rename = "StockID")]
    pub stock_id: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub last_price: f64,
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl PortfolioStock {
    /// Percentage move from the previous price, `None` if there is no baseline.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        if self.last_price.abs() < f64::EPSILON {
            return None;
        }
        Some((self.price - self.last_price) / self.last_price * 100.0)
    }
}
