//! Invoice routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, FINANCE, STAFF};
use crate::services::billing::{self, BillingError, InvoiceRow, InvoiceStatus};
use crate::services::session::Role;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub status: String,
    pub issued_at: Option<String>,
}

fn to_response(row: InvoiceRow) -> InvoiceResponse {
    InvoiceResponse {
        id: row.id,
        customer_id: row.customer_id,
        description: row.description,
        amount_cents: row.amount_cents,
        status: row.status.as_str().to_owned(),
        issued_at: row.issued_at,
    }
}

#[derive(Deserialize)]
pub struct CreateInvoiceBody {
    pub customer_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
}

#[derive(Deserialize)]
pub struct UpdateInvoiceStatusBody {
    pub status: String,
}

pub(crate) fn validate_new_invoice(body: &CreateInvoiceBody) -> Result<(), &'static str> {
    if body.description.trim().is_empty() {
        return Err("description must not be empty");
    }
    if body.amount_cents <= 0 {
        return Err("amount must be positive");
    }
    Ok(())
}

pub(crate) fn billing_error_to_status(err: &BillingError) -> StatusCode {
    match err {
        BillingError::NotFound(_) => StatusCode::NOT_FOUND,
        BillingError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        BillingError::IllegalTransition { .. } => StatusCode::CONFLICT,
        BillingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Row scope for invoice listings: clients see only their own invoices.
fn customer_scope(auth: &AuthUser) -> Option<Uuid> {
    if auth.user.role == Role::Client {
        Some(auth.user.id)
    } else {
        None
    }
}

/// `GET /api/invoices` — list invoices (all for staff, own for clients).
pub async fn list_invoices(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InvoiceResponse>>, StatusCode> {
    auth.require(&[])?;

    let rows = billing::list_invoices(&state.pool, customer_scope(&auth))
        .await
        .map_err(|e| billing_error_to_status(&e))?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /api/invoices/:id` — fetch one invoice. Clients get 404 for
/// invoices that are not theirs so existence is not leaked.
pub async fn get_invoice(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, StatusCode> {
    auth.require(&[])?;

    let row = billing::get_invoice(&state.pool, invoice_id)
        .await
        .map_err(|e| billing_error_to_status(&e))?;

    if auth.user.role == Role::Client && row.customer_id != auth.user.id {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(to_response(row)))
}

/// `POST /api/invoices` — create a draft invoice (staff only).
pub async fn create_invoice(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateInvoiceBody>,
) -> Result<Json<InvoiceResponse>, StatusCode> {
    auth.require(STAFF)?;

    if let Err(reason) = validate_new_invoice(&body) {
        tracing::warn!(%reason, "rejected invoice create");
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = billing::create_invoice(&state.pool, body.customer_id, body.description.trim(), body.amount_cents, auth.user.id)
        .await
        .map_err(|e| billing_error_to_status(&e))?;

    Ok(Json(to_response(row)))
}

/// `PATCH /api/invoices/:id` — move an invoice through its lifecycle
/// (staff; voiding is admin-only).
pub async fn update_invoice_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
    Json(body): Json<UpdateInvoiceStatusBody>,
) -> Result<Json<InvoiceResponse>, StatusCode> {
    auth.require(STAFF)?;

    let Some(to) = InvoiceStatus::from_str(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if to == InvoiceStatus::Void {
        auth.require(FINANCE)?;
    }

    let row = billing::set_invoice_status(&state.pool, invoice_id, to)
        .await
        .map_err(|e| billing_error_to_status(&e))?;

    Ok(Json(to_response(row)))
}

#[cfg(test)]
#[path = "invoices_test.rs"]
mod tests;
