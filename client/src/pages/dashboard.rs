//! Dashboard page — authenticated landing route.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::state::session::SessionState;

/// Authenticated landing page with role-aware shortcuts. Any signed-in
/// user may view it; the guard sends everyone else to `/login`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireRole>
            <DashboardInner/>
        </RequireRole>
    }
}

#[component]
fn DashboardInner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_default()
    };
    let is_staff = move || session.get().user.is_some_and(|u| u.role.is_staff());
    let is_admin = move || session.get().user.is_some_and(|u| u.role.is_admin());

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <main class="dashboard-page__body">
                <h1>{greeting}</h1>
                <div class="dashboard-page__cards">
                    <a class="dashboard-card" href="/appointments">
                        <h2>"Appointments"</h2>
                        <p>"Book a workshop slot or review the schedule."</p>
                    </a>
                    <a class="dashboard-card" href="/invoices">
                        <h2>{move || if is_staff() { "Invoices" } else { "My Invoices" }}</h2>
                        <p>"Billing for completed workshop jobs."</p>
                    </a>
                    <Show when=is_admin>
                        <a class="dashboard-card" href="/payments">
                            <h2>"Payments"</h2>
                            <p>"Record and reconcile invoice payments."</p>
                        </a>
                        <a class="dashboard-card" href="/admin/accounts">
                            <h2>"Accounts"</h2>
                            <p>"Manage user accounts and roles."</p>
                        </a>
                    </Show>
                </div>
            </main>
        </div>
    }
}
