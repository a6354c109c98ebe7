//! Shared header with role-aware links and logout.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Top navigation bar. Staff-only and admin-only sections appear based on
/// the session role; logout resets the session store before leaving.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let identity = move || {
        session
            .get()
            .user
            .map(|u| format!("{} ({})", u.name, u.role.label()))
            .unwrap_or_else(|| "guest".to_owned())
    };
    let is_staff = move || session.get().user.is_some_and(|u| u.role.is_staff());
    let is_admin = move || session.get().user.is_some_and(|u| u.role.is_admin());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(SessionState::clear_user);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Claimdesk"</a>
            <nav class="navbar__links">
                <a href="/appointments">"Appointments"</a>
                <Show when=is_staff>
                    <a href="/invoices">"Invoices"</a>
                </Show>
                <Show when=move || !is_staff()>
                    <a href="/invoices">"My Invoices"</a>
                </Show>
                <Show when=is_admin>
                    <a href="/payments">"Payments"</a>
                    <a href="/admin/accounts">"Accounts"</a>
                </Show>
            </nav>
            <span class="navbar__spacer"></span>
            <span class="navbar__self">{identity}</span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
