//! Appointment routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, STAFF};
use crate::services::schedule::{self, AppointmentRow, AppointmentStatus, ScheduleError};
use crate::services::session::Role;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle: String,
    pub notes: Option<String>,
    pub scheduled_at: String,
    pub status: String,
}

fn to_response(row: AppointmentRow) -> AppointmentResponse {
    AppointmentResponse {
        id: row.id,
        customer_id: row.customer_id,
        vehicle: row.vehicle,
        notes: row.notes,
        scheduled_at: row.scheduled_at,
        status: row.status.as_str().to_owned(),
    }
}

#[derive(Deserialize)]
pub struct CreateAppointmentBody {
    pub vehicle: String,
    pub notes: Option<String>,
    pub scheduled_at: String,
    /// Staff may book on behalf of a customer; clients always book themselves.
    pub customer_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct UpdateAppointmentBody {
    pub status: String,
}

pub(crate) fn schedule_error_to_status(err: &ScheduleError) -> StatusCode {
    match err {
        ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
        ScheduleError::InvalidStatus(_) | ScheduleError::InvalidTime(_) => StatusCode::BAD_REQUEST,
        ScheduleError::IllegalTransition { .. } => StatusCode::CONFLICT,
        ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/appointments` — list appointments (all for staff, own for clients).
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AppointmentResponse>>, StatusCode> {
    auth.require(&[])?;

    let scope = if auth.user.role == Role::Client { Some(auth.user.id) } else { None };
    let rows = schedule::list_appointments(&state.pool, scope)
        .await
        .map_err(|e| schedule_error_to_status(&e))?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/appointments` — book an appointment. Any authenticated user;
/// the customer is the caller unless staff books for someone else.
pub async fn create_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateAppointmentBody>,
) -> Result<Json<AppointmentResponse>, StatusCode> {
    auth.require(&[])?;

    if body.vehicle.trim().is_empty() || body.scheduled_at.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let customer_id = match body.customer_id {
        Some(other) if other != auth.user.id => {
            auth.require(STAFF)?;
            other
        }
        _ => auth.user.id,
    };

    let row = schedule::create_appointment(
        &state.pool,
        customer_id,
        body.vehicle.trim(),
        body.notes.as_deref(),
        body.scheduled_at.trim(),
    )
    .await
    .map_err(|e| schedule_error_to_status(&e))?;

    Ok(Json(to_response(row)))
}

/// `PATCH /api/appointments/:id` — confirm/complete/cancel (staff only).
pub async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<Uuid>,
    Json(body): Json<UpdateAppointmentBody>,
) -> Result<Json<AppointmentResponse>, StatusCode> {
    auth.require(STAFF)?;

    let Some(to) = AppointmentStatus::from_str(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let row = schedule::set_appointment_status(&state.pool, appointment_id, to)
        .await
        .map_err(|e| schedule_error_to_status(&e))?;

    Ok(Json(to_response(row)))
}

#[cfg(test)]
#[path = "appointments_test.rs"]
mod tests;
