use super::*;

// =============================================================================
// InvoiceStatus lifecycle
// =============================================================================

#[test]
fn draft_can_issue_or_void() {
    assert!(InvoiceStatus::Draft.can_transition(InvoiceStatus::Issued));
    assert!(InvoiceStatus::Draft.can_transition(InvoiceStatus::Void));
    assert!(!InvoiceStatus::Draft.can_transition(InvoiceStatus::Paid));
}

#[test]
fn issued_can_pay_or_void() {
    assert!(InvoiceStatus::Issued.can_transition(InvoiceStatus::Paid));
    assert!(InvoiceStatus::Issued.can_transition(InvoiceStatus::Void));
    assert!(!InvoiceStatus::Issued.can_transition(InvoiceStatus::Draft));
}

#[test]
fn paid_and_void_are_terminal() {
    for terminal in [InvoiceStatus::Paid, InvoiceStatus::Void] {
        for to in [InvoiceStatus::Draft, InvoiceStatus::Issued, InvoiceStatus::Paid, InvoiceStatus::Void] {
            assert!(!terminal.can_transition(to), "{terminal} -> {to} must be rejected");
        }
    }
}

#[test]
fn no_self_transitions() {
    for status in [InvoiceStatus::Draft, InvoiceStatus::Issued, InvoiceStatus::Paid, InvoiceStatus::Void] {
        assert!(!status.can_transition(status));
    }
}

// =============================================================================
// Status tags
// =============================================================================

#[test]
fn status_round_trips_through_tags() {
    for status in [InvoiceStatus::Draft, InvoiceStatus::Issued, InvoiceStatus::Paid, InvoiceStatus::Void] {
        assert_eq!(InvoiceStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn status_rejects_unknown_tags() {
    assert_eq!(InvoiceStatus::from_str("open"), None);
    assert_eq!(InvoiceStatus::from_str("Paid"), None);
}

#[test]
fn illegal_transition_message_names_both_states() {
    let err = BillingError::IllegalTransition { from: InvoiceStatus::Paid, to: InvoiceStatus::Issued };
    assert_eq!(err.to_string(), "illegal status transition: paid -> issued");
}

// =============================================================================
// settles
// =============================================================================

#[test]
fn settles_at_or_above_invoice_amount() {
    assert!(settles(10_000, 10_000));
    assert!(settles(10_000, 12_500));
    assert!(!settles(10_000, 9_999));
    assert!(!settles(10_000, 0));
}
