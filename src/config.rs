//! Client configuration: backend base URL, token storage key, timeouts.
//!
//! Native builds read the process environment. The browser build has no
//! environment at runtime, so the same variables are captured at compile time
//! with `option_env!` and used as the lookup source.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors produced while building [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was present but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    /// Whole-request timeout for native builds. The browser's `fetch` has no
    /// client-level timeout, so wasm builds ignore it.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `STOCKMARKET_API_URL`: backend base URL, default `http://localhost:8080`
    /// - `STOCKMARKET_TOKEN_KEY`: storage key for the session token, default `token`
    /// - `STOCKMARKET_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a URL or key is present but blank,
    /// or when the URL has no `http`/`https` scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(compiled_var)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup("STOCKMARKET_API_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        let token_key = match lookup("STOCKMARKET_TOKEN_KEY") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    var: "STOCKMARKET_TOKEN_KEY",
                    reason: "must not be empty".to_owned(),
                });
            }
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_TOKEN_KEY.to_owned(),
        };

        let request_timeout_secs = lookup("STOCKMARKET_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self { api_base_url, token_key, request_timeout_secs })
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid { var: "STOCKMARKET_API_URL", reason: "must not be empty".to_owned() });
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "STOCKMARKET_API_URL",
            reason: format!("expected an http(s) URL, got '{trimmed}'"),
        });
    }
    Ok(trimmed.to_owned())
}

#[cfg(target_arch = "wasm32")]
fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        "STOCKMARKET_API_URL" => option_env!("STOCKMARKET_API_URL"),
        "STOCKMARKET_TOKEN_KEY" => option_env!("STOCKMARKET_TOKEN_KEY"),
        "STOCKMARKET_REQUEST_TIMEOUT_SECS" => option_env!("STOCKMARKET_REQUEST_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_owned)
}
