//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (forms, fetches) and delegates
//! rendering details to `components`. Authenticated calls go through
//! [`with_stock_api`], which ends the session when the backend rejects the
//! token; the app shell then redirects to the login page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod stock_detail;
pub mod stocks;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpApi};
use crate::net::types::{ApiError, with_retry_hint};
use crate::state::session::AppSession;

/// Flag that flips to `false` when the calling view is torn down.
///
/// Async work started by a page checks it before applying a response, so a
/// reply that lands after the user navigated away is dropped.
#[derive(Clone, Debug)]
pub struct ViewLiveness(Arc<AtomicBool>);

impl ViewLiveness {
    /// Register a liveness flag for the current reactive owner.
    pub fn install() -> Self {
        let liveness = Self::detached();
        let flag = liveness.clone();
        on_cleanup(move || flag.end());
        liveness
    }

    /// A flag not tied to any owner.
    #[must_use]
    pub fn detached() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Check the email/password pair from a login or signup form.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Run an authenticated call with the current token.
///
/// A 401 ends the session before the error is returned.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when logged out, otherwise whatever the
/// call returns.
pub async fn with_stock_api<T, F, Fut>(
    session: RwSignal<AppSession>,
    config: &ClientConfig,
    call: F,
) -> Result<T, ApiError>
where
    F: FnOnce(HttpApi, String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let token = session
        .with_untracked(|s| s.token().map(str::to_owned))
        .ok_or(ApiError::MissingToken)?;
    let api = HttpApi::new(config)?;
    let result = call(api, token.clone()).await;
    if let Err(e) = &result
        && let Some(true) = session.try_update(|s| s.handle_api_error(e, &token))
    {
        log::info!("session ended after rejected stock call");
    }
    result
}

/// Check the stored token against `GET /me`, ending the session if rejected.
pub async fn revalidate_session(session: RwSignal<AppSession>, config: &ClientConfig) {
    let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
        return;
    };
    let result = match HttpApi::new(config) {
        Ok(api) => api.me(&token).await,
        Err(e) => Err(e),
    };
    if let Some(Err(e)) = session.try_update(|s| s.complete_revalidation(&token, result)) {
        log::warn!("session revalidation failed: {e}");
    }
}

/// Message for an error from a stock call.
#[must_use]
pub fn stock_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized(_) | ApiError::MissingToken => "Your session has expired. Please log in again.".to_owned(),
        ApiError::Network(_) => with_retry_hint("Could not reach the server".to_owned(), err),
        ApiError::Rejected { message, .. } => with_retry_hint(message.clone(), err),
        other => other.to_string(),
    }
}
