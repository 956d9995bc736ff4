//! Route guard: decides whether a navigation may render its page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called by the app shell on every render of the current location. The
//! check reads only the in-memory session; it never touches the network, so
//! a token the backend has since revoked still passes until an API call
//! fails with 401 and the session is ended.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{LOGIN_PATH, Page, RouteDescriptor};
use crate::state::session::Session;

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested page unchanged.
    Allowed(Page),
    /// Do not render; navigate to `redirect` instead. The requested path is dropped.
    Denied { redirect: &'static str },
}

/// Per-navigation state: `Unknown -> Checking -> {Allowed, Denied}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    Checking,
    Allowed(Page),
    Denied { redirect: &'static str },
}

impl GuardState {
    /// Advance one transition. Terminal states stay put.
    #[must_use]
    pub fn step(self, route: &RouteDescriptor, session: &Session) -> Self {
        match self {
            Self::Unknown => Self::Checking,
            Self::Checking => {
                if !route.guarded || session.is_authenticated() {
                    Self::Allowed(route.page)
                } else {
                    Self::Denied { redirect: LOGIN_PATH }
                }
            }
            terminal => terminal,
        }
    }

    /// The navigation outcome, once a terminal state is reached.
    #[must_use]
    pub fn outcome(self) -> Option<Navigation> {
        match self {
            Self::Allowed(page) => Some(Navigation::Allowed(page)),
            Self::Denied { redirect } => Some(Navigation::Denied { redirect }),
            Self::Unknown | Self::Checking => None,
        }
    }
}

/// Run a navigation attempt to completion.
#[must_use]
pub fn check(route: &RouteDescriptor, session: &Session) -> Navigation {
    let mut state = GuardState::Unknown;
    loop {
        if let Some(outcome) = state.outcome() {
            if let Navigation::Denied { redirect } = outcome {
                log::debug!("guard denied {}: redirecting to {redirect}", route.path);
            }
            return outcome;
        }
        state = state.step(route, session);
    }
}
