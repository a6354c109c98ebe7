//! User directory service — account listing and role administration.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::Role;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("user not found: {0}")]
    NotFound(Uuid),
    #[error("unknown role tag: {0}")]
    UnknownRole(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Account row as shown in the admin directory.
#[derive(Debug, Clone)]
pub struct AccountRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub member_since: String,
}

/// List all accounts, newest first.
///
/// # Errors
///
/// Returns `UnknownRole` if a stored role tag no longer parses.
pub async fn list_accounts(pool: &PgPool) -> Result<Vec<AccountRow>, DirectoryError> {
    let rows = sqlx::query(
        r"SELECT id, email, name, role, to_char(created_at, 'YYYY-MM-DD') AS member_since
          FROM users
          ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|r| {
            let raw_role: String = r.get("role");
            let role = Role::from_str(&raw_role).ok_or(DirectoryError::UnknownRole(raw_role))?;
            Ok(AccountRow {
                id: r.get("id"),
                email: r.get("email"),
                name: r.get("name"),
                role,
                member_since: r.get("member_since"),
            })
        })
        .collect()
}

/// Change an account's role.
///
/// # Errors
///
/// Returns `NotFound` if the account does not exist.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), DirectoryError> {
    let updated = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
        .bind(user_id)
        .bind(role.as_str())
        .execute(pool)
        .await?
        .rows_affected();

    if updated == 0 {
        return Err(DirectoryError::NotFound(user_id));
    }
    Ok(())
}
