//! REST API client for the stock-watch backend.
//!
//! `AuthApi` and `StockApi` are the seams the rest of the crate talks to;
//! `HttpApi` implements both over `reqwest`, which uses `fetch` in the
//! browser build and a native connection pool elsewhere.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are mapped by
//! status (401 becomes `Unauthorized`) with the backend's message preserved.
//! Nothing is retried here; retrying is the caller's user action.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{
    AddStockRequest, ApiError, Credentials, LoginResponse, Me, PortfolioStock, SearchRequest, SignupOutcome,
    StockDetails, StockSearchResult,
};
use crate::config::ClientConfig;

/// Authentication endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /signup`.
    async fn signup(&self, credentials: &Credentials) -> Result<SignupOutcome, ApiError>;

    /// `GET /me`, used to check whether a stored token is still accepted.
    async fn me(&self, token: &str) -> Result<Me, ApiError>;
}

/// Stock endpoints. All of them require a bearer token.
#[async_trait(?Send)]
pub trait StockApi {
    /// `POST /stock/search`.
    async fn search_stocks(&self, token: &str, query: &str) -> Result<Vec<StockSearchResult>, ApiError>;

    /// `GET /stock/details?symbol=`.
    async fn stock_details(&self, token: &str, symbol: &str) -> Result<StockDetails, ApiError>;

    /// `GET /stock/list`.
    async fn user_stocks(&self, token: &str) -> Result<Vec<PortfolioStock>, ApiError>;

    /// `POST /stock/add`.
    async fn add_stock(&self, token: &str, symbol: &str) -> Result<StockDetails, ApiError>;

    /// `DELETE /stock/{stock_id}`.
    async fn remove_stock(&self, token: &str, stock_id: &str) -> Result<(), ApiError>;
}

/// Trim and upper-case a ticker symbol. Returns `None` when blank.
#[must_use]
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return None;
    }
    Some(symbol.to_ascii_uppercase())
}

fn require_token(token: &str) -> Result<&str, ApiError> {
    if token.is_empty() { Err(ApiError::MissingToken) } else { Ok(token) }
}

fn require_symbol(raw: &str) -> Result<String, ApiError> {
    normalize_symbol(raw)
        .ok_or_else(|| ApiError::Rejected { status: 400, message: "Stock symbol is required".to_owned() })
}

fn remove_stock_path(stock_id: &str) -> String {
    format!("stock/{stock_id}")
}

/// `reqwest`-backed implementation of [`AuthApi`] and [`StockApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: config.clone() })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            log::debug!("api request failed: status={} body={body}", status.as_u16());
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get(&self, path: &str, token: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = require_token(token)?;
        Ok(self.http.get(self.config.endpoint(path)).bearer_auth(token))
    }

    fn post(&self, path: &str, token: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = require_token(token)?;
        Ok(self.http.post(self.config.endpoint(path)).bearer_auth(token))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self.http.post(self.config.endpoint("login")).json(credentials);
        self.send_json(request).await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<SignupOutcome, ApiError> {
        let request = self.http.post(self.config.endpoint("signup")).json(credentials);
        let body = self.send(request).await?;
        SignupOutcome::from_body(&body)
    }

    async fn me(&self, token: &str) -> Result<Me, ApiError> {
        let request = self.get("me", token)?;
        self.send_json(request).await
    }
}

#[async_trait(?Send)]
impl StockApi for HttpApi {
    async fn search_stocks(&self, token: &str, query: &str) -> Result<Vec<StockSearchResult>, ApiError> {
        let request = self.post("stock/search", token)?.json(&SearchRequest { query: query.trim() });
        self.send_json(request).await
    }

    async fn stock_details(&self, token: &str, symbol: &str) -> Result<StockDetails, ApiError> {
        let symbol = require_symbol(symbol)?;
        let request = self.get("stock/details", token)?.query(&[("symbol", symbol.as_str())]);
        self.send_json(request).await
    }

    async fn user_stocks(&self, token: &str) -> Result<Vec<PortfolioStock>, ApiError> {
        let request = self.get("stock/list", token)?;
        self.send_json(request).await
    }

    async fn add_stock(&self, token: &str, symbol: &str) -> Result<StockDetails, ApiError> {
        let symbol = require_symbol(symbol)?;
        let request = self.post("stock/add", token)?.json(&AddStockRequest { symbol: &symbol });
        self.send_json(request).await
    }

    async fn remove_stock(&self, token: &str, stock_id: &str) -> Result<(), ApiError> {
        let token = require_token(token)?;
        let request = self
            .http
            .delete(self.config.endpoint(&remove_stock_path(stock_id)))
            .bearer_auth(token);
        self.send(request).await.map(|_| ())
    }
}
