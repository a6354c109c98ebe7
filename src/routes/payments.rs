//! Payment routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, FINANCE, STAFF};
use crate::routes::invoices::billing_error_to_status;
use crate::services::billing::{self, PaymentRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount_cents: i64,
    pub method: String,
    pub reference: Option<String>,
    pub paid_at: String,
}

fn to_response(row: PaymentRow) -> PaymentResponse {
    PaymentResponse {
        id: row.id,
        invoice_id: row.invoice_id,
        amount_cents: row.amount_cents,
        method: row.method,
        reference: row.reference,
        paid_at: row.paid_at,
    }
}

#[derive(Deserialize)]
pub struct RecordPaymentBody {
    pub amount_cents: i64,
    pub method: String,
    pub reference: Option<String>,
}

/// `GET /api/invoices/:id/payments` — list payments for an invoice (staff).
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<Vec<PaymentResponse>>, StatusCode> {
    auth.require(STAFF)?;

    let rows = billing::list_payments(&state.pool, invoice_id)
        .await
        .map_err(|e| billing_error_to_status(&e))?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/invoices/:id/payments` — record a payment (admins only).
pub async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
    Json(body): Json<RecordPaymentBody>,
) -> Result<Json<PaymentResponse>, StatusCode> {
    auth.require(FINANCE)?;

    if body.amount_cents <= 0 || body.method.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = billing::record_payment(
        &state.pool,
        invoice_id,
        body.amount_cents,
        body.method.trim(),
        body.reference.as_deref(),
        auth.user.id,
    )
    .await
    .map_err(|e| billing_error_to_status(&e))?;

    Ok(Json(to_response(row)))
}
