//! Login page — hands off to the identity provider.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Claimdesk"</h1>
                <p class="login-card__subtitle">"Workshop & claims administration"</p>
                <a
                    href="/auth/login"
                    class="login-button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            // Full page navigation: the OAuth flow leaves the app.
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/auth/login");
                            }
                        }
                    }
                >
                    "Sign in"
                </a>
                <p class="login-card__hint">"You will be redirected to the identity provider."</p>
            </div>
        </div>
    }
}
