//! Role guard component wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision itself is the pure machine in `util::guard`; this component
//! only subscribes it to the session context and turns redirect outcomes
//! into router navigations. Because the decision re-runs on every session
//! change, a session that expires while a page is mounted re-routes on the
//! next state change, not only at mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardOutcome, NavigationIntent};

/// Gate the wrapped content on the session and a role allow-list.
///
/// An empty `allowed` list admits any authenticated user. Unauthenticated
/// sessions are sent to `/login`, authenticated-but-disallowed ones to
/// `/unauthorized`; both render nothing while the navigation happens.
#[component]
pub fn RequireRole(
    /// Roles allowed to see the wrapped content.
    #[prop(optional)]
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Fire each navigation intent at most once, even if session state flaps.
    let fired = RwSignal::new(None::<NavigationIntent>);
    Effect::new(move || {
        if let GuardOutcome::Redirect(intent) = guard::evaluate(&session.get(), allowed) {
            if fired.get_untracked() != Some(intent) {
                fired.set(Some(intent));
                navigate(intent.path(), NavigateOptions::default());
            }
        }
    });

    view! {
        <Show
            when=move || matches!(guard::evaluate(&session.get(), allowed), GuardOutcome::Render)
            fallback=move || {
                view! {
                    <Show when=move || matches!(guard::evaluate(&session.get(), allowed), GuardOutcome::Checking)>
                        <p class="guard-checking">"Checking session..."</p>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
