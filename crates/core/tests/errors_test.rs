use std::error::Error;

use chrono::NaiveDate;
use fitdesk_core::errors::{AgendaError, AgendaResult};
use fitdesk_core::models::analytics::DateRange;

#[test]
fn test_agenda_error_display() {
    let not_found = AgendaError::NotFound("Schedule not found".to_string());
    let validation = AgendaError::Validation("Invalid input".to_string());
    let unavailable = AgendaError::DataUnavailable("appointments timed out".to_string());
    let database = AgendaError::Database(eyre::eyre!("Database connection failed"));
    let internal = AgendaError::Internal(Box::new(std::io::Error::other("Internal error")));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Schedule not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        unavailable.to_string(),
        "Data unavailable: appointments timed out"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_invalid_range_message_names_both_ends() {
    let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();

    let err = DateRange::new(start, end).unwrap_err();

    assert!(matches!(err, AgendaError::InvalidRange { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid range: end 2026-10-12 is before start 2026-10-19"
    );
}

#[test]
fn test_error_source() {
    let io_error = std::io::Error::other("IO error");
    let agenda_error = AgendaError::Internal(Box::new(io_error));

    assert!(agenda_error.source().is_some());
}

#[test]
fn test_agenda_result() {
    let result: AgendaResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: AgendaResult<i32> = Err(AgendaError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let agenda_error: AgendaError = eyre::eyre!("pool closed").into();

    assert!(matches!(agenda_error, AgendaError::Database(_)));
    assert!(agenda_error.to_string().contains("pool closed"));
}
