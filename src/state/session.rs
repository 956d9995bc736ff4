//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created when the app mounts and provided to the
//! whole view tree as context. The route guard reads it on every navigation;
//! only `login` and `logout` write it.
//!
//! INVARIANT
//! =========
//! `is_authenticated()` is true exactly when a non-empty token is held.
//! `Session` has no flag of its own, so nothing can set one independently.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::types::{ApiError, Credentials, LoginResponse, Me, SignupOutcome, with_retry_hint};
use crate::util::storage::{BrowserStorage, StorageError, TokenStorage};

/// Session store used by the browser app.
pub type AppSession = SessionStore<BrowserStorage>;

/// Current authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a session from a stored or freshly issued token. Empty tokens
    /// yield an anonymous session.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Errors surfaced by session mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),

    /// The backend reported success but issued no token.
    #[error("login response carried an empty token")]
    EmptyToken,
}

impl SessionError {
    /// Message suitable for showing next to a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(ApiError::Unauthorized(msg)) => format!("Login failed: {msg}"),
            Self::Api(err @ ApiError::Network(_)) => with_retry_hint("Could not reach the server".to_owned(), err),
            Self::Api(err @ ApiError::Rejected { message, .. }) => with_retry_hint(message.clone(), err),
            other => other.to_string(),
        }
    }
}

/// Single source of truth for "is there a logged-in user".
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    session: Session,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Open the store, restoring any token persisted under `key`.
    ///
    /// Runs synchronously so the authenticated flag is known before the
    /// first guarded route renders.
    pub fn open(storage: S, key: &str) -> Self {
        let session = Session::from_token(storage.get(key));
        log::debug!("session restored: authenticated={}", session.is_authenticated());
        Self { storage, key: key.to_owned(), session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Authenticate against `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns the API error on bad credentials or network failure, or
    /// [`SessionError::Storage`] if the token could not be persisted. The
    /// session and storage are unchanged on any error.
    pub async fn login<A>(&mut self, api: &A, email: &str, password: &str) -> Result<(), SessionError>
    where
        A: AuthApi + ?Sized,
    {
        let result = api.login(&Credentials::new(email, password)).await;
        self.complete_login(result)
    }

    /// Apply the outcome of a `POST /login` call.
    ///
    /// Split out of [`SessionStore::login`] so a reactive UI can await the
    /// request without holding the store, then apply the result in one update.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub fn complete_login(&mut self, result: Result<LoginResponse, ApiError>) -> Result<(), SessionError> {
        let response = result.inspect_err(|e| log::warn!("login failed: {e}"))?;
        if response.token.is_empty() {
            log::warn!("login failed: empty token");
            return Err(SessionError::EmptyToken);
        }
        self.storage.set(&self.key, &response.token)?;
        self.session = Session::from_token(Some(response.token));
        log::info!("login succeeded");
        Ok(())
    }

    /// Register an account via `POST /signup`. Never authenticates.
    ///
    /// # Errors
    ///
    /// Returns the API error on validation/conflict or network failure.
    pub async fn signup<A>(&self, api: &A, email: &str, password: &str) -> Result<SignupOutcome, SessionError>
    where
        A: AuthApi + ?Sized,
    {
        let outcome = api
            .signup(&Credentials::new(email, password))
            .await
            .inspect_err(|e| log::warn!("signup failed: {e}"))?;
        log::info!("signup succeeded: {}", outcome.message);
        Ok(outcome)
    }

    /// Drop the token from storage and memory. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.storage.remove(&self.key);
        if self.session.is_authenticated() {
            log::info!("logged out");
        }
        self.session = Session::anonymous();
    }

    /// React to an error from an authenticated call made with `sent_token`:
    /// a rejected token ends the session. Returns `true` if the session was
    /// ended.
    ///
    /// A rejection of a token that has since been replaced by a newer login
    /// is ignored.
    pub fn handle_api_error(&mut self, err: &ApiError, sent_token: &str) -> bool {
        if !err.is_unauthorized() || self.token() != Some(sent_token) {
            return false;
        }
        log::warn!("token rejected by backend, logging out: {err}");
        self.logout();
        true
    }

    /// Ask the backend whether the held token is still accepted.
    ///
    /// Returns `Ok(true)` if it is, `Ok(false)` if there was no token or it
    /// was rejected (in which case the session is ended).
    ///
    /// # Errors
    ///
    /// Network and other non-auth failures are returned and leave the session
    /// as it was.
    pub async fn revalidate<A>(&mut self, api: &A) -> Result<bool, SessionError>
    where
        A: AuthApi + ?Sized,
    {
        let Some(token) = self.token().map(str::to_owned) else {
            return Ok(false);
        };
        let result = api.me(&token).await;
        self.complete_revalidation(&token, result)
    }

    /// Apply the outcome of a `GET /me` call made with `sent_token`.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::revalidate`].
    pub fn complete_revalidation(
        &mut self,
        sent_token: &str,
        result: Result<Me, ApiError>,
    ) -> Result<bool, SessionError> {
        match result {
            Ok(_) => Ok(self.token() == Some(sent_token)),
            Err(e) if self.handle_api_error(&e, sent_token) => Ok(false),
            Err(e) if e.is_unauthorized() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
