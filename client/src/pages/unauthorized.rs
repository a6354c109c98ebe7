//! Unauthorized page — the forbidden target of the role guard.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <h1>"Not allowed"</h1>
                <p>"Your account does not have access to that page."</p>
                <a class="btn" href="/">"Back to dashboard"</a>
            </div>
        </div>
    }
}
