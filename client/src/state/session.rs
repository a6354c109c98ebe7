//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated exactly once per application load by the session bootstrap in
//! `app`, and read by the role guard and user-aware components. One owned
//! instance lives at the application root; everything else receives it via
//! context.
//!
//! LIFECYCLE
//! =========
//! Starts anonymous and idle, makes a single transition through
//! `loading = true` while the bootstrap fetch is in flight, then resolves
//! to a terminal state: a user, anonymous, or anonymous-with-error. The
//! store only changes again on logout, which resets it to anonymous.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;

use crate::net::api::CurrentUser;
use crate::net::types::User;

/// Remount-proof single-run gate for the bootstrap fetch.
///
/// Lives outside `SessionState` on purpose: the store resets on logout and
/// the root component may remount, but the bootstrap must still run exactly
/// once per application load.
#[derive(Debug, Default)]
pub struct BootstrapGate {
    ran: Cell<bool>,
}

impl BootstrapGate {
    /// Claim the single run. Returns `true` exactly once; checked-and-set
    /// synchronously, so on a single-threaded runtime no second caller can
    /// slip in before the flag flips.
    pub fn try_claim(&self) -> bool {
        !self.ran.replace(true)
    }
}

/// Why the session bootstrap failed to resolve a user.
///
/// The two kinds stay distinguishable: a server answering with an error
/// status is not the same failure as a request that never got a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The identity endpoint answered with an unexpected HTTP status.
    Server { status: u16 },
    /// The request failed before producing a response.
    Network(String),
}

impl SessionError {
    /// Short human-readable message for banners and logs.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Server { status } => format!("Error {status}"),
            Self::Network(detail) => format!("Network failure: {detail}"),
        }
    }
}

/// Session state tracking the current user, the bootstrap fetch, and the
/// last bootstrap failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<SessionError>,
}

impl SessionState {
    /// Mark the bootstrap fetch as in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Terminal: an authenticated principal.
    pub fn resolve_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.error = None;
    }

    /// Terminal: the normal logged-out state (HTTP 401), no error.
    pub fn resolve_anonymous(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
    }

    /// Terminal: anonymous because the bootstrap failed. The error is
    /// informational only; consumers treat this the same as logged out.
    pub fn resolve_error(&mut self, error: SessionError) {
        self.user = None;
        self.loading = false;
        self.error = Some(error);
    }

    /// Drop the current user (logout). Leaves `loading` untouched.
    pub fn clear_user(&mut self) {
        self.user = None;
        self.error = None;
    }

    /// Commit a classified current-user fetch outcome. Every branch ends
    /// with `loading = false`.
    pub fn apply_fetch(&mut self, fetched: CurrentUser) {
        match fetched {
            CurrentUser::Authenticated(user) => self.resolve_user(user),
            CurrentUser::Anonymous => self.resolve_anonymous(),
            CurrentUser::ServerError { status } => self.resolve_error(SessionError::Server { status }),
            CurrentUser::NetworkError(detail) => self.resolve_error(SessionError::Network(detail)),
        }
    }
}
