//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON responses so serde
//! round-trips stay lossless. Roles travel as lowercase string tags.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Permission level attached to every user account. No hierarchy; every
/// protected view declares its own explicit allow-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Employee,
    Admin,
    Admindev,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::Admindev => "admindev",
        }
    }

    /// Human-facing label for headers and the account directory.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Employee => "Employee",
            Self::Admin => "Admin",
            Self::Admindev => "Admin (dev)",
        }
    }

    /// Whether this role is workshop staff rather than a customer.
    #[must_use]
    pub fn is_staff(self) -> bool {
        !matches!(self, Self::Client)
    }

    /// Whether this role may see money-moving surfaces (payments, roles).
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::Admindev)
    }
}

/// An authenticated user as returned by the `/api/user` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email registered with the identity provider.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Permission level.
    pub role: Role,
}

/// An invoice as listed by `/api/invoices`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: String,
    pub issued_at: Option<String>,
}

/// A payment recorded against an invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub amount_cents: i64,
    pub method: String,
    pub reference: Option<String>,
    pub paid_at: String,
}

/// A workshop appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub customer_id: String,
    pub vehicle: String,
    pub notes: Option<String>,
    pub scheduled_at: String,
    pub status: String,
}

/// An account row from the admin directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub member_since: String,
}
