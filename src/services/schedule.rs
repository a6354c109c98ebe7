//! Appointment scheduling service.
//!
//! Appointments follow a fixed lifecycle: clients request a slot, staff
//! confirm it, and a confirmed appointment is later completed or cancelled.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Requested,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "requested" => Some(Self::Requested),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `to`.
    /// `completed` and `cancelled` are terminal.
    #[must_use]
    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Requested, Self::Confirmed)
                | (Self::Requested, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("appointment not found: {0}")]
    NotFound(Uuid),
    #[error("unknown appointment status tag: {0}")]
    InvalidStatus(String),
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: AppointmentStatus, to: AppointmentStatus },
    #[error("unparseable schedule time: {0}")]
    InvalidTime(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct AppointmentRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle: String,
    pub notes: Option<String>,
    pub scheduled_at: String,
    pub status: AppointmentStatus,
}

fn appointment_from_row(row: &sqlx::postgres::PgRow) -> Result<AppointmentRow, ScheduleError> {
    let raw_status: String = row.get("status");
    let status = AppointmentStatus::from_str(&raw_status).ok_or(ScheduleError::InvalidStatus(raw_status))?;
    Ok(AppointmentRow {
        id: row.get("id"),
        customer_id: row.get("customer_id"),
        vehicle: row.get("vehicle"),
        notes: row.get("notes"),
        scheduled_at: row.get("scheduled_at"),
        status,
    })
}

const APPOINTMENT_COLUMNS: &str = r"id, customer_id, vehicle, notes,
    to_char(scheduled_at, 'YYYY-MM-DD HH24:MI') AS scheduled_at, status";

/// Create a requested appointment.
///
/// # Errors
///
/// Returns `InvalidTime` when Postgres rejects the timestamp text, or a
/// database error for anything else.
pub async fn create_appointment(
    pool: &PgPool,
    customer_id: Uuid,
    vehicle: &str,
    notes: Option<&str>,
    scheduled_at: &str,
) -> Result<AppointmentRow, ScheduleError> {
    let id = Uuid::new_v4();
    let row = sqlx::query(&format!(
        "INSERT INTO appointments (id, customer_id, vehicle, notes, scheduled_at)
         VALUES ($1, $2, $3, $4, $5::timestamptz)
         RETURNING {APPOINTMENT_COLUMNS}"
    ))
    .bind(id)
    .bind(customer_id)
    .bind(vehicle)
    .bind(notes)
    .bind(scheduled_at)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        let bad_time = matches!(&e, sqlx::Error::Database(db) if db.code().as_deref() == Some("22007"));
        if bad_time {
            ScheduleError::InvalidTime(scheduled_at.to_owned())
        } else {
            ScheduleError::Database(e)
        }
    })?;

    appointment_from_row(&row)
}

/// List appointments, optionally scoped to a single customer, soonest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_appointments(pool: &PgPool, customer: Option<Uuid>) -> Result<Vec<AppointmentRow>, ScheduleError> {
    let query = format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM appointments
         WHERE $1::uuid IS NULL OR customer_id = $1
         ORDER BY scheduled_at ASC"
    );
    let rows = sqlx::query(&query).bind(customer).fetch_all(pool).await?;

    rows.iter().map(appointment_from_row).collect()
}

/// Fetch a single appointment.
///
/// # Errors
///
/// Returns `NotFound` if no such appointment exists.
pub async fn get_appointment(pool: &PgPool, appointment_id: Uuid) -> Result<AppointmentRow, ScheduleError> {
    let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1");
    let row = sqlx::query(&query)
        .bind(appointment_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ScheduleError::NotFound(appointment_id))?;

    appointment_from_row(&row)
}

/// Move an appointment to a new lifecycle state.
///
/// # Errors
///
/// Returns `IllegalTransition` if the lifecycle forbids the move, and
/// `NotFound` if the appointment does not exist.
pub async fn set_appointment_status(
    pool: &PgPool,
    appointment_id: Uuid,
    to: AppointmentStatus,
) -> Result<AppointmentRow, ScheduleError> {
    let current = get_appointment(pool, appointment_id).await?;
    if !current.status.can_transition(to) {
        return Err(ScheduleError::IllegalTransition { from: current.status, to });
    }

    sqlx::query("UPDATE appointments SET status = $2 WHERE id = $1")
        .bind(appointment_id)
        .bind(to.as_str())
        .execute(pool)
        .await?;

    get_appointment(pool, appointment_id).await
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
