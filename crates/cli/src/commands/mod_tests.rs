// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use nv_core::ApiError;
use yare::parameterized;

#[parameterized(
    date_only = { "2026-03-01", (2026, 3, 1, 0, 0) },
    date_and_minutes = { "2026-03-01 09:30", (2026, 3, 1, 9, 30) },
    rfc3339 = { "2026-03-01T09:30:00Z", (2026, 3, 1, 9, 30) },
    offset = { "2026-03-01T10:30:00+01:00", (2026, 3, 1, 9, 30) },
)]
fn parse_when_accepts(input: &str, expected: (i32, u32, u32, u32, u32)) {
    let (y, mo, d, h, mi) = expected;
    assert_eq!(
        parse_when(input).unwrap(),
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    );
}

#[test]
fn parse_when_rejects_garbage() {
    let err = parse_when("next tuesday").unwrap_err();
    assert!(matches!(err, Error::InvalidDateTime(ref s) if s == "next tuesday"));
}

#[test]
fn write_json_is_pretty_with_trailing_newline() {
    let mut out = Vec::new();
    write_json(&mut out, &serde_json::json!({"id": 7})).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"id\": 7\n}\n");
}

#[test]
fn loaded_surfaces_read_errors() {
    let state = QueryState::<i32> {
        status: crate::sync::QueryStatus::Error,
        error: Some(ApiError::AuthExpired),
        ..QueryState::idle()
    };
    assert!(matches!(
        loaded(state).unwrap_err(),
        Error::Api(ApiError::AuthExpired)
    ));
}
