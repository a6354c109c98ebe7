//! Billing service — invoice CRUD, payment recording, status transitions.
//!
//! DESIGN
//! ======
//! Invoices move through a small explicit lifecycle (`draft -> issued ->
//! paid`, with `void` as the abandonment branch). Transition legality is a
//! pure function so route handlers and tests share one source of truth.
//! Payments only attach to issued invoices; an invoice flips to `paid`
//! automatically once recorded payments cover its amount.

use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
    Void,
}

impl InvoiceStatus {
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(Self::Draft),
            "issued" => Some(Self::Issued),
            "paid" => Some(Self::Paid),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Void => "void",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `to`.
    /// `paid` and `void` are terminal.
    #[must_use]
    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Issued) | (Self::Draft, Self::Void) | (Self::Issued, Self::Paid) | (Self::Issued, Self::Void)
        )
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("invoice not found: {0}")]
    NotFound(Uuid),
    #[error("unknown invoice status tag: {0}")]
    InvalidStatus(String),
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: InvoiceStatus, to: InvoiceStatus },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from invoice queries. Timestamps are pre-formatted by the
/// query (`to_char`) so DTO conversion stays string-only.
#[derive(Debug, Clone)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub issued_at: Option<String>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount_cents: i64,
    pub method: String,
    pub reference: Option<String>,
    pub recorded_by: Option<Uuid>,
    pub paid_at: String,
}

fn parse_status(raw: &str) -> Result<InvoiceStatus, BillingError> {
    InvoiceStatus::from_str(raw).ok_or_else(|| BillingError::InvalidStatus(raw.to_owned()))
}

/// Whether `paid_cents` of recorded payments settles an `amount_cents` invoice.
pub(crate) fn settles(amount_cents: i64, paid_cents: i64) -> bool {
    paid_cents >= amount_cents
}

fn invoice_from_row(row: &sqlx::postgres::PgRow) -> Result<InvoiceRow, BillingError> {
    let raw_status: String = row.get("status");
    Ok(InvoiceRow {
        id: row.get("id"),
        customer_id: row.get("customer_id"),
        description: row.get("description"),
        amount_cents: row.get("amount_cents"),
        status: parse_status(&raw_status)?,
        issued_at: row.get("issued_at"),
        created_by: row.get("created_by"),
    })
}

const INVOICE_COLUMNS: &str = r"id, customer_id, description, amount_cents, status,
    to_char(issued_at, 'YYYY-MM-DD HH24:MI') AS issued_at, created_by";

// =============================================================================
// INVOICES
// =============================================================================

/// Create a draft invoice for a customer.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_invoice(
    pool: &PgPool,
    customer_id: Uuid,
    description: &str,
    amount_cents: i64,
    created_by: Uuid,
) -> Result<InvoiceRow, BillingError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO invoices (id, customer_id, description, amount_cents, created_by) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(customer_id)
        .bind(description)
        .bind(amount_cents)
        .bind(created_by)
        .execute(pool)
        .await?;

    Ok(InvoiceRow {
        id,
        customer_id,
        description: description.to_owned(),
        amount_cents,
        status: InvoiceStatus::Draft,
        issued_at: None,
        created_by: Some(created_by),
    })
}

/// List invoices, optionally scoped to a single customer.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_invoices(pool: &PgPool, customer: Option<Uuid>) -> Result<Vec<InvoiceRow>, BillingError> {
    let query = format!(
        "SELECT {INVOICE_COLUMNS} FROM invoices
         WHERE $1::uuid IS NULL OR customer_id = $1
         ORDER BY created_at DESC"
    );
    let rows = sqlx::query(&query).bind(customer).fetch_all(pool).await?;

    rows.iter().map(invoice_from_row).collect()
}

/// Fetch a single invoice.
///
/// # Errors
///
/// Returns `NotFound` if no such invoice exists.
pub async fn get_invoice(pool: &PgPool, invoice_id: Uuid) -> Result<InvoiceRow, BillingError> {
    let query = format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1");
    let row = sqlx::query(&query)
        .bind(invoice_id)
        .fetch_optional(pool)
        .await?
        .ok_or(BillingError::NotFound(invoice_id))?;

    invoice_from_row(&row)
}

/// Move an invoice to a new lifecycle state.
///
/// # Errors
///
/// Returns `IllegalTransition` if the lifecycle forbids the move, and
/// `NotFound` if the invoice does not exist.
pub async fn set_invoice_status(pool: &PgPool, invoice_id: Uuid, to: InvoiceStatus) -> Result<InvoiceRow, BillingError> {
    let current = get_invoice(pool, invoice_id).await?;
    if !current.status.can_transition(to) {
        return Err(BillingError::IllegalTransition { from: current.status, to });
    }

    sqlx::query(
        "UPDATE invoices
         SET status = $2, issued_at = CASE WHEN $2 = 'issued' THEN now() ELSE issued_at END
         WHERE id = $1",
    )
    .bind(invoice_id)
    .bind(to.as_str())
    .execute(pool)
    .await?;

    get_invoice(pool, invoice_id).await
}

// =============================================================================
// PAYMENTS
// =============================================================================

/// Sum of recorded payments against an invoice.
async fn paid_total(pool: &PgPool, invoice_id: Uuid) -> Result<i64, BillingError> {
    let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount_cents), 0) FROM payments WHERE invoice_id = $1")
        .bind(invoice_id)
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Record a payment against an issued invoice. Flips the invoice to `paid`
/// once payments cover the invoiced amount.
///
/// # Errors
///
/// Returns `IllegalTransition` when the invoice is not in the `issued`
/// state, and `NotFound` if the invoice does not exist.
pub async fn record_payment(
    pool: &PgPool,
    invoice_id: Uuid,
    amount_cents: i64,
    method: &str,
    reference: Option<&str>,
    recorded_by: Uuid,
) -> Result<PaymentRow, BillingError> {
    let invoice = get_invoice(pool, invoice_id).await?;
    if invoice.status != InvoiceStatus::Issued {
        return Err(BillingError::IllegalTransition { from: invoice.status, to: InvoiceStatus::Paid });
    }

    let id = Uuid::new_v4();
    let row = sqlx::query(
        r"INSERT INTO payments (id, invoice_id, amount_cents, method, reference, recorded_by)
          VALUES ($1, $2, $3, $4, $5, $6)
          RETURNING to_char(paid_at, 'YYYY-MM-DD HH24:MI') AS paid_at",
    )
    .bind(id)
    .bind(invoice_id)
    .bind(amount_cents)
    .bind(method)
    .bind(reference)
    .bind(recorded_by)
    .fetch_one(pool)
    .await?;

    if settles(invoice.amount_cents, paid_total(pool, invoice_id).await?) {
        sqlx::query("UPDATE invoices SET status = 'paid' WHERE id = $1")
            .bind(invoice_id)
            .execute(pool)
            .await?;
        tracing::info!(%invoice_id, "invoice settled");
    }

    Ok(PaymentRow {
        id,
        invoice_id,
        amount_cents,
        method: method.to_owned(),
        reference: reference.map(str::to_owned),
        recorded_by: Some(recorded_by),
        paid_at: row.get("paid_at"),
    })
}

/// List payments recorded against an invoice, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_payments(pool: &PgPool, invoice_id: Uuid) -> Result<Vec<PaymentRow>, BillingError> {
    let rows = sqlx::query(
        r"SELECT id, invoice_id, amount_cents, method, reference, recorded_by,
                 to_char(paid_at, 'YYYY-MM-DD HH24:MI') AS paid_at
          FROM payments WHERE invoice_id = $1
          ORDER BY paid_at ASC",
    )
    .bind(invoice_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| PaymentRow {
            id: r.get("id"),
            invoice_id: r.get("invoice_id"),
            amount_cents: r.get("amount_cents"),
            method: r.get("method"),
            reference: r.get("reference"),
            recorded_by: r.get("recorded_by"),
            paid_at: r.get("paid_at"),
        })
        .collect())
}

#[cfg(test)]
#[path = "billing_test.rs"]
mod tests;
