//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/anonymous since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Data fetches degrade to `Option` so UI behavior survives transient
//! failures without crashing hydration. The current-user fetch is the
//! exception: the session bootstrap needs to distinguish "logged out" from
//! "broken", so it returns a classified outcome instead.

#![allow(clippy::unused_async)]

use super::types::{Account, Appointment, Invoice, Payment, User};

/// Classified outcome of the `GET /api/user` fetch.
///
/// 401 is the normal logged-out case, not a failure. Other non-2xx statuses
/// and transport errors are kept distinguishable so the session store can
/// record what actually went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrentUser {
    Authenticated(User),
    Anonymous,
    ServerError { status: u16 },
    NetworkError(String),
}

/// Fetch the currently authenticated user from `/api/user`.
pub async fn fetch_current_user() -> CurrentUser {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/user").send().await {
            Ok(resp) => resp,
            Err(e) => return CurrentUser::NetworkError(e.to_string()),
        };
        match resp.status() {
            200..=299 => match resp.json::<User>().await {
                Ok(user) => CurrentUser::Authenticated(user),
                Err(e) => CurrentUser::NetworkError(e.to_string()),
            },
            401 => CurrentUser::Anonymous,
            status => CurrentUser::ServerError { status },
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CurrentUser::Anonymous
    }
}

/// Log out the current user by calling `POST /api/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/logout").send().await;
    }
}

/// Fetch invoices visible to the current user. Empty on failure or on the
/// server.
pub async fn fetch_invoices() -> Vec<Invoice> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<Invoice>("/api/invoices").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(url: &str) -> Vec<T> {
    let Ok(resp) = gloo_net::http::Request::get(url).send().await else {
        return Vec::new();
    };
    if !resp.ok() {
        return Vec::new();
    }
    resp.json::<Vec<T>>().await.unwrap_or_default()
}

/// Create a draft invoice via `POST /api/invoices`.
pub async fn create_invoice(customer_id: &str, description: &str, amount_cents: i64) -> Option<Invoice> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/invoices")
            .json(&serde_json::json!({
                "customer_id": customer_id,
                "description": description,
                "amount_cents": amount_cents,
            }))
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Invoice>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (customer_id, description, amount_cents);
        None
    }
}

/// Move an invoice through its lifecycle via `PATCH /api/invoices/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_invoice_status(invoice_id: &str, status: &str) -> Result<Invoice, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/invoices/{invoice_id}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(&serde_json::json!({ "status": status }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("status update failed: {}", resp.status()));
        }
        resp.json::<Invoice>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (invoice_id, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch payments for an invoice from `/api/invoices/{id}/payments`.
/// Empty on failure or on the server.
pub async fn fetch_payments(invoice_id: &str) -> Vec<Payment> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<Payment>(&format!("/api/invoices/{invoice_id}/payments")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = invoice_id;
        Vec::new()
    }
}

/// Record a payment via `POST /api/invoices/{id}/payments`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn record_payment(
    invoice_id: &str,
    amount_cents: i64,
    method: &str,
    reference: Option<&str>,
) -> Result<Payment, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/invoices/{invoice_id}/payments");
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({
                "amount_cents": amount_cents,
                "method": method,
                "reference": reference,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("payment rejected: {}", resp.status()));
        }
        resp.json::<Payment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (invoice_id, amount_cents, method, reference);
        Err("not available on server".to_owned())
    }
}

/// Fetch appointments visible to the current user. Empty on failure or on
/// the server.
pub async fn fetch_appointments() -> Vec<Appointment> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<Appointment>("/api/appointments").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Book an appointment via `POST /api/appointments`.
pub async fn create_appointment(vehicle: &str, notes: Option<&str>, scheduled_at: &str) -> Option<Appointment> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/appointments")
            .json(&serde_json::json!({
                "vehicle": vehicle,
                "notes": notes,
                "scheduled_at": scheduled_at,
            }))
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Appointment>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (vehicle, notes, scheduled_at);
        None
    }
}

/// Update an appointment's status via `PATCH /api/appointments/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_appointment_status(appointment_id: &str, status: &str) -> Result<Appointment, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/appointments/{appointment_id}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(&serde_json::json!({ "status": status }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("status update failed: {}", resp.status()));
        }
        resp.json::<Appointment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (appointment_id, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch the account directory from `/api/accounts` (admins only).
/// Empty on failure or on the server.
pub async fn fetch_accounts() -> Vec<Account> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<Account>("/api/accounts").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Change an account's role via `PATCH /api/accounts/{id}/role`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_account_role(user_id: &str, role: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/accounts/{user_id}/role");
        let resp = gloo_net::http::Request::patch(&url)
            .json(&serde_json::json!({ "role": role }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("role change failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err("not available on server".to_owned())
    }
}
