//! Identity provider OAuth service — code exchange, profile fetch, user upsert.
//!
//! The provider is configured entirely through environment variables so the
//! same flow works against any OAuth2/OIDC-style issuer that exposes an
//! authorize, token, and userinfo endpoint.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Identity provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct IdpConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl IdpConfig {
    /// Load from `IDP_CLIENT_ID`, `IDP_CLIENT_SECRET`, `IDP_REDIRECT_URI`,
    /// `IDP_AUTHORIZE_URL`, `IDP_TOKEN_URL`, `IDP_USERINFO_URL`.
    /// Returns `None` if any are missing (sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("IDP_CLIENT_ID").ok()?;
        let client_secret = std::env::var("IDP_CLIENT_SECRET").ok()?;
        let redirect_uri = std::env::var("IDP_REDIRECT_URI").ok()?;
        let authorize_url = std::env::var("IDP_AUTHORIZE_URL").ok()?;
        let token_url = std::env::var("IDP_TOKEN_URL").ok()?;
        let userinfo_url = std::env::var("IDP_USERINFO_URL").ok()?;
        Some(Self { client_id, client_secret, redirect_uri, authorize_url, token_url, userinfo_url })
    }

    /// Build the provider authorization URL carrying the CSRF `state` tag.
    #[must_use]
    pub fn build_authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope=openid+email+profile&state={}",
            self.authorize_url, self.client_id, self.redirect_uri, state
        )
    }

    /// Fixed config for unit tests that never perform network calls.
    #[cfg(test)]
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            client_id: "test-client".to_owned(),
            client_secret: "test-secret".to_owned(),
            redirect_uri: "https://claimdesk.test/auth/callback".to_owned(),
            authorize_url: "https://idp.test/authorize".to_owned(),
            token_url: "https://idp.test/token".to_owned(),
            userinfo_url: "https://idp.test/userinfo".to_owned(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Profile returned by the provider's userinfo endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct IdpProfile {
    /// Provider-scoped stable subject identifier.
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("userinfo fetch failed: {0}")]
    Userinfo(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Exchange an OAuth code for an access token.
pub async fn exchange_code(config: &IdpConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(&config.token_url)
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": config.client_id,
            "client_secret": config.client_secret,
            "code": code,
            "grant_type": "authorization_code",
            "redirect_uri": config.redirect_uri,
        }))
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated user's profile from the userinfo endpoint.
pub async fn fetch_profile(config: &IdpConfig, access_token: &str) -> Result<IdpProfile, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(&config.userinfo_url)
        .header("Authorization", format!("Bearer {access_token}"))
        .header("User-Agent", "claimdesk")
        .send()
        .await
        .map_err(|e| AuthError::Userinfo(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::Userinfo(format!("{status}: {body}")));
    }

    resp.json::<IdpProfile>()
        .await
        .map_err(|e| AuthError::Userinfo(e.to_string()))
}

/// Display name for a profile: provider name, or the email local part.
pub(crate) fn display_name(profile: &IdpProfile) -> String {
    match &profile.name {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => profile
            .email
            .split('@')
            .next()
            .unwrap_or(&profile.email)
            .to_owned(),
    }
}

/// Upsert a user from their provider profile. Returns the user's UUID.
///
/// First-seen accounts get the `client` role; an admin promotes them later
/// through the directory routes.
pub async fn upsert_user(pool: &PgPool, profile: &IdpProfile) -> Result<Uuid, AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (idp_id, email, name, role)
          VALUES ($1, $2, $3, 'client')
          ON CONFLICT (idp_id) DO UPDATE SET email = EXCLUDED.email, name = EXCLUDED.name
          RETURNING id",
    )
    .bind(&profile.sub)
    .bind(&profile.email)
    .bind(display_name(profile))
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
