//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API routes with Leptos SSR rendering under
//! a single Axum router. Pages are server-rendered and hydrated; everything
//! under `/api` and `/auth` is handled before the SSR fallback.

pub mod accounts;
pub mod appointments;
pub mod auth;
pub mod invoices;
pub mod payments;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API + identity provider routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/login", get(auth::login_redirect))
        .route("/auth/callback", get(auth::login_callback))
        .route("/api/user", get(auth::me))
        .route("/api/logout", post(auth::logout))
        .route("/api/invoices", get(invoices::list_invoices).post(invoices::create_invoice))
        .route(
            "/api/invoices/{id}",
            get(invoices::get_invoice).patch(invoices::update_invoice_status),
        )
        .route(
            "/api/invoices/{id}/payments",
            get(payments::list_payments).post(payments::record_payment),
        )
        .route(
            "/api/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/api/appointments/{id}", patch(appointments::update_appointment))
        .route("/api/accounts", get(accounts::list_accounts))
        .route("/api/accounts/{id}/role", patch(accounts::update_role))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full router: API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn router(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
