use super::*;

#[test]
fn not_found_maps_to_404() {
    let err = ScheduleError::NotFound(Uuid::nil());
    assert_eq!(schedule_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn bad_tags_and_times_map_to_400() {
    assert_eq!(
        schedule_error_to_status(&ScheduleError::InvalidStatus("booked".to_owned())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        schedule_error_to_status(&ScheduleError::InvalidTime("next tuesday".to_owned())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn illegal_transition_maps_to_409() {
    let err = ScheduleError::IllegalTransition {
        from: AppointmentStatus::Completed,
        to: AppointmentStatus::Confirmed,
    };
    assert_eq!(schedule_error_to_status(&err), StatusCode::CONFLICT);
}
