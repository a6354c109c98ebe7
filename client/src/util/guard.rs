//! Route-protection state machine.
//!
//! DESIGN
//! ======
//! The guard decision is a pure mapping from `(session, allow-list)` to an
//! outcome; the act of navigating lives in the `RequireRole` component so
//! the machine stays independently testable. An empty allow-list means
//! "any authenticated user".

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Where the guard wants the router to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    ToLogin,
    ToUnauthorized,
}

impl NavigationIntent {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::ToLogin => "/login",
            Self::ToUnauthorized => "/unauthorized",
        }
    }
}

/// What a protected view should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Bootstrap still in flight: show a loading indicator, do nothing else.
    Checking,
    /// Render the protected content.
    Render,
    /// Render nothing and route away.
    Redirect(NavigationIntent),
}

/// Evaluate the guard for a session state and a role allow-list.
///
/// A recorded bootstrap error does not change the decision: anonymous is
/// anonymous whether the identity endpoint failed or answered 401.
#[must_use]
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Checking;
    }

    let Some(user) = &state.user else {
        return GuardOutcome::Redirect(NavigationIntent::ToLogin);
    };

    if allowed.is_empty() || allowed.contains(&user.role) {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(NavigationIntent::ToUnauthorized)
    }
}
