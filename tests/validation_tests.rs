use chrono::{TimeZone, Utc};

use slotbook_api::models::{BookingRequest, ServiceError, WeeklyAvailability};
use slotbook_api::utils::time::convert_time_string_to_minutes;
use slotbook_api::utils::validation::is_valid_email;

#[test]
fn test_convert_time_string_to_minutes() {
    assert_eq!(convert_time_string_to_minutes("08:00").unwrap(), 480);
    assert_eq!(convert_time_string_to_minutes("18:00").unwrap(), 1080);
    assert_eq!(convert_time_string_to_minutes("00:00").unwrap(), 0);
    assert_eq!(convert_time_string_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn test_convert_time_string_rejects_malformed_input() {
    for input in ["0800", "8am", "24:00", "08:60", ":30", "08:", ""] {
        let result = convert_time_string_to_minutes(input);
        assert!(
            matches!(result, Err(ServiceError::Internal(_))),
            "expected internal error for {:?}",
            input
        );
    }
}

#[test]
fn test_is_valid_email() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("johndoe@example.com"));
    assert!(is_valid_email("user.name+tag@mail.example.co"));

    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@example.com"));
}

#[test]
fn test_weekly_availability_default_seed() {
    let availability = WeeklyAvailability::default();
    let intervals = availability.intervals();

    assert_eq!(intervals.len(), 7);
    for interval in intervals {
        // Monday through Friday enabled, weekend off
        assert_eq!(interval.enabled, (1..=5).contains(&interval.week_day));
        assert_eq!(interval.start_time, "08:00");
        assert_eq!(interval.end_time, "18:00");
    }
}

#[test]
fn test_booking_request_described_date_and_time() {
    let request = BookingRequest {
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        observations: None,
        date: Utc.with_ymd_and_hms(2022, 9, 22, 18, 0, 0).unwrap(),
    };

    assert_eq!(request.described_date(), "22 de September de 2022");
    assert_eq!(request.described_time(), "18:00h");
}

#[test]
fn test_booking_request_wire_shape() {
    let request = BookingRequest {
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        observations: None,
        date: Utc.with_ymd_and_hms(2022, 9, 22, 18, 0, 0).unwrap(),
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "johndoe@example.com");
    assert!(body["observations"].is_null());
    assert_eq!(body["date"], "2022-09-22T18:00:00Z");
}
