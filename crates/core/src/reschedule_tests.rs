// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use serde_json::json;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, hour, 0, 0).unwrap()
}

#[test]
fn reschedule_deserializes_with_form_datetimes() {
    let attempt: ReSchedule = serde_json::from_value(json!({
        "id": 3,
        "applicant": 42,
        "status": "FAILED",
        "start_datetime": "2026-02-01T09:00",
        "end_datetime": "2026-02-10T17:00",
        "error": "Login rejected",
        "created_at": "2026-01-31T10:00:00+00:00"
    }))
    .unwrap();

    assert_eq!(attempt.applicant, 42);
    assert_eq!(attempt.status, ScheduleStatus::Failed);
    assert_eq!(attempt.error.as_deref(), Some("Login rejected"));
    assert!(attempt.updated_at.is_none());
    assert!(!attempt.may_change());
}

#[test]
fn reschedule_with_unknown_status_still_parses() {
    let attempt: ReSchedule = serde_json::from_value(json!({
        "id": 4,
        "applicant": 42,
        "status": "ON_HOLD",
        "start_datetime": "2026-02-01T09:00:00Z",
        "end_datetime": "2026-02-10T17:00:00Z",
        "created_at": "2026-01-31T10:00:00Z",
        "updated_at": null
    }))
    .unwrap();
    assert!(attempt.status.is_unknown());
}

#[test]
fn create_validates_window_order() {
    assert!(ReScheduleCreate::new(42, at(9), at(17)).validate().is_ok());
    assert!(ReScheduleCreate::new(42, at(17), at(9)).validate().is_err());
    assert!(ReScheduleCreate::new(42, at(9), at(9)).validate().is_err());
}

#[test]
fn create_rejects_placeholder_applicant() {
    let err = ReScheduleCreate::new(0, at(9), at(17)).validate().unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[test]
fn create_serializes_rfc3339() {
    let value = serde_json::to_value(ReScheduleCreate::new(42, at(9), at(17))).unwrap();
    assert_eq!(value["applicant"], 42);
    assert_eq!(value["start_datetime"], "2026-02-01T09:00:00+00:00");
    assert!(value.get("status").is_none());
}

#[test]
fn update_omits_absent_fields() {
    let patch = ReScheduleUpdate {
        end_datetime: Some(at(18)),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({"end_datetime": "2026-02-01T18:00:00+00:00"})
    );
    assert!(patch.validate().is_ok());
    assert!(ReScheduleUpdate::default().validate().is_err());
}
