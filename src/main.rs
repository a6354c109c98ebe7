mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Identity provider config (non-fatal: sign-in disabled if env missing).
    let idp = match services::auth::IdpConfig::from_env() {
        Some(config) => {
            tracing::info!(authorize_url = %config.authorize_url, "identity provider configured");
            Some(config)
        }
        None => {
            tracing::warn!("identity provider not configured — sign-in disabled");
            None
        }
    };

    let state = state::AppState::new(pool, idp);

    let app = routes::router(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "claimdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
