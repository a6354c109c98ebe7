use super::*;

fn body(description: &str, amount_cents: i64) -> CreateInvoiceBody {
    CreateInvoiceBody {
        customer_id: Uuid::new_v4(),
        description: description.to_owned(),
        amount_cents,
    }
}

// =============================================================================
// validate_new_invoice
// =============================================================================

#[test]
fn accepts_positive_amount_and_description() {
    assert!(validate_new_invoice(&body("brake pads + labor", 12_500)).is_ok());
}

#[test]
fn rejects_blank_description() {
    assert!(validate_new_invoice(&body("   ", 12_500)).is_err());
}

#[test]
fn rejects_non_positive_amounts() {
    assert!(validate_new_invoice(&body("tow", 0)).is_err());
    assert!(validate_new_invoice(&body("tow", -500)).is_err());
}

// =============================================================================
// billing_error_to_status
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    let err = BillingError::NotFound(Uuid::nil());
    assert_eq!(billing_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn invalid_status_maps_to_400() {
    let err = BillingError::InvalidStatus("open".to_owned());
    assert_eq!(billing_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn illegal_transition_maps_to_409() {
    let err = BillingError::IllegalTransition { from: InvoiceStatus::Paid, to: InvoiceStatus::Void };
    assert_eq!(billing_error_to_status(&err), StatusCode::CONFLICT);
}
