//! Session management and the role model.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived opaque session tokens stored server-side. The
//! `users.role` column is the single source of truth for authorization;
//! roles are parsed strictly at this boundary so handlers never see an
//! unknown tag.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// ROLES
// =============================================================================

/// Permission level attached to every user account.
///
/// There is no hierarchy between roles; every protected surface declares an
/// explicit allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Employee,
    Admin,
    Admindev,
}

impl Role {
    /// Parse a stored role tag. Unknown tags are rejected, not defaulted.
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Self::Client),
            "employee" => Some(Self::Employee),
            "admin" => Some(Self::Admin),
            "admindev" => Some(Self::Admindev),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::Admindev => "admindev",
        }
    }
}

// =============================================================================
// TOKENS
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// SESSIONS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown role tag: {0}")]
    UnknownRole(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email registered with the identity provider.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Permission level.
    pub role: Role,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, SessionError> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, SessionError> {
    let row = sqlx::query(
        r"SELECT u.id, u.email, u.name, u.role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(r) = row else {
        return Ok(None);
    };

    let raw_role: String = r.get("role");
    let role = Role::from_str(&raw_role).ok_or_else(|| SessionError::UnknownRole(raw_role))?;

    Ok(Some(SessionUser {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        role,
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), SessionError> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
