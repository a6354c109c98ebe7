//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    accounts::AccountsPage, appointments::AppointmentsPage, dashboard::DashboardPage, invoices::InvoicesPage,
    login::LoginPage, payments::PaymentsPage, unauthorized::UnauthorizedPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session context for the whole tree and sets up client-side
/// routing. Pages and guards receive the session via context instead of a
/// process-wide global.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    install_session_bootstrap(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/claimdesk.css"/>
        <Title text="Claimdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("invoices") view=InvoicesPage/>
                <Route path=StaticSegment("payments") view=PaymentsPage/>
                <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("accounts")) view=AccountsPage/>
            </Routes>
        </Router>
    }
}

/// Run the one-shot session bootstrap.
///
/// The has-run flag lives here rather than in the store so a remounted root
/// cannot issue a second fetch; the store's `loading` flag only reports
/// progress. Exactly one request to `/api/user` happens per application
/// load, whatever it resolves to.
fn install_session_bootstrap(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::BootstrapGate;

        thread_local! {
            static GATE: BootstrapGate = BootstrapGate::default();
        }

        if !GATE.with(BootstrapGate::try_claim) {
            return;
        }

        session.update(SessionState::begin_loading);
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_current_user().await;
            session.update(|s| s.apply_fetch(fetched));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // On the server the session renders anonymous; hydration performs
        // the real fetch in the browser.
        let _ = session;
    }
}
