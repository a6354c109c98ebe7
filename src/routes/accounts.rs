//! Account directory routes (admin-only role administration).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, FINANCE};
use crate::services::directory::{self, AccountRow, DirectoryError};
use crate::services::session::Role;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub member_since: String,
}

fn to_response(row: AccountRow) -> AccountResponse {
    AccountResponse {
        id: row.id,
        email: row.email,
        name: row.name,
        role: row.role.as_str().to_owned(),
        member_since: row.member_since,
    }
}

#[derive(Deserialize)]
pub struct UpdateRoleBody {
    pub role: String,
}

fn directory_error_to_status(err: &DirectoryError) -> StatusCode {
    match err {
        DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        DirectoryError::UnknownRole(_) => StatusCode::BAD_REQUEST,
        DirectoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/accounts` — list all accounts (admins only).
pub async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AccountResponse>>, StatusCode> {
    auth.require(FINANCE)?;

    let rows = directory::list_accounts(&state.pool)
        .await
        .map_err(|e| directory_error_to_status(&e))?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `PATCH /api/accounts/:id/role` — change an account's role (admins only).
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateRoleBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    auth.require(FINANCE)?;

    let Some(role) = Role::from_str(&body.role) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    directory::set_role(&state.pool, user_id, role)
        .await
        .map_err(|e| directory_error_to_status(&e))?;

    tracing::info!(%user_id, role = role.as_str(), changed_by = %auth.user.id, "account role changed");
    Ok(Json(serde_json::json!({ "ok": true })))
}
