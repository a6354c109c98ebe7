use super::*;

#[test]
fn requested_moves_to_confirmed_or_cancelled() {
    assert!(AppointmentStatus::Requested.can_transition(AppointmentStatus::Confirmed));
    assert!(AppointmentStatus::Requested.can_transition(AppointmentStatus::Cancelled));
    assert!(!AppointmentStatus::Requested.can_transition(AppointmentStatus::Completed));
}

#[test]
fn confirmed_moves_to_completed_or_cancelled() {
    assert!(AppointmentStatus::Confirmed.can_transition(AppointmentStatus::Completed));
    assert!(AppointmentStatus::Confirmed.can_transition(AppointmentStatus::Cancelled));
    assert!(!AppointmentStatus::Confirmed.can_transition(AppointmentStatus::Requested));
}

#[test]
fn completed_and_cancelled_are_terminal() {
    for terminal in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
        for to in [
            AppointmentStatus::Requested,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert!(!terminal.can_transition(to), "{terminal} -> {to} must be rejected");
        }
    }
}

#[test]
fn status_round_trips_through_tags() {
    for status in [
        AppointmentStatus::Requested,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ] {
        assert_eq!(AppointmentStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn status_rejects_unknown_tags() {
    assert_eq!(AppointmentStatus::from_str("booked"), None);
    assert_eq!(AppointmentStatus::from_str(""), None);
}
