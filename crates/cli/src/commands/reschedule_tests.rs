// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::cli::PageArgs;
use crate::error::Error;
use crate::transport::test_helpers::{console_store, output, reschedule_json, MockTransport};
use crate::transport::Method;
use nv_core::ScheduleStatus;
use serde_json::json;

#[tokio::test]
async fn list_for_applicant_uses_applicant_route() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Get,
        "/re-schedules/applicant/7",
        200,
        json!([reschedule_json(99, 7, "PENDING"), reschedule_json(100, 7, "FAILED")]),
    );
    let store = console_store(&transport);
    let mut out = Vec::new();

    let cmd = RescheduleCommand::List {
        applicant: Some(7),
        page: PageArgs {
            limit: Some(2),
            offset: None,
        },
    };
    run(&store, cmd, OutputFormat::Text, &mut out).await.unwrap();

    assert_eq!(output(&out).lines().count(), 2);
    assert_eq!(transport.calls(Method::Get, "/re-schedules"), 0);
    assert_eq!(
        transport.requests()[0].query,
        vec![("limit".to_string(), "2".to_string())]
    );
}

#[tokio::test]
async fn empty_list_says_so() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/re-schedules", 200, json!([]));
    let store = console_store(&transport);
    let mut out = Vec::new();

    let cmd = RescheduleCommand::List {
        applicant: None,
        page: PageArgs::default(),
    };
    run(&store, cmd, OutputFormat::Text, &mut out).await.unwrap();

    assert_eq!(output(&out), "No re-schedule attempts.\n");
}

#[tokio::test]
async fn show_json_keeps_unknown_status_verbatim() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/re-schedules/99", 200, reschedule_json(99, 7, "ON_HOLD"));
    let store = console_store(&transport);
    let mut out = Vec::new();

    run(&store, RescheduleCommand::Show { id: 99 }, OutputFormat::Json, &mut out)
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed["status"], "ON_HOLD");
}

#[tokio::test]
async fn new_sends_parsed_window() {
    let transport = MockTransport::new();
    transport.respond(Method::Post, "/re-schedules", 201, reschedule_json(99, 7, "PENDING"));
    let store = console_store(&transport);
    let mut out = Vec::new();

    let cmd = RescheduleCommand::New {
        applicant: 7,
        start: "2026-03-01".into(),
        end: "2026-03-31 17:00".into(),
        status: Some(ScheduleStatus::Pending),
    };
    run(&store, cmd, OutputFormat::Text, &mut out).await.unwrap();

    assert_eq!(output(&out), "Created re-schedule #99 for applicant #7\n");
    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["applicant"], 7);
    assert_eq!(body["status"], "PENDING");
    assert!(body["start_datetime"].as_str().unwrap().starts_with("2026-03-01T00:00:00"));
    assert!(body["end_datetime"].as_str().unwrap().starts_with("2026-03-31T17:00:00"));
}

#[tokio::test]
async fn new_rejects_inverted_window_without_request() {
    let transport = MockTransport::new();
    let store = console_store(&transport);

    let cmd = RescheduleCommand::New {
        applicant: 7,
        start: "2026-04-01".into(),
        end: "2026-03-01".into(),
        status: None,
    };
    let err = run(&store, cmd, OutputFormat::Text, &mut Vec::new())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("start_datetime must be before end_datetime"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn new_rejects_unparseable_date() {
    let transport = MockTransport::new();
    let store = console_store(&transport);

    let cmd = RescheduleCommand::New {
        applicant: 7,
        start: "soon".into(),
        end: "2026-03-01".into(),
        status: None,
    };
    let err = run(&store, cmd, OutputFormat::Text, &mut Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidDateTime(_)));
}

#[tokio::test]
async fn edit_failure_prints_error_only() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Put,
        "/re-schedules/99",
        404,
        json!({"detail": "Re-schedule not found"}),
    );
    let store = console_store(&transport);
    let mut out = Vec::new();

    let cmd = RescheduleCommand::Edit {
        id: 99,
        start: None,
        end: None,
        status: Some(ScheduleStatus::Failed),
        error: Some("cancelled by operator".into()),
    };
    let err = run(&store, cmd, OutputFormat::Text, &mut out).await.unwrap_err();

    assert_eq!(err.to_string(), "server returned 404: Re-schedule not found");
    assert!(out.is_empty());
}

#[tokio::test]
async fn delete_reports_success() {
    let transport = MockTransport::new();
    transport.respond(Method::Delete, "/re-schedules/99", 204, json!(null));
    let store = console_store(&transport);
    let mut out = Vec::new();

    run(&store, RescheduleCommand::Delete { id: 99 }, OutputFormat::Text, &mut out)
        .await
        .unwrap();

    assert_eq!(output(&out), "Deleted re-schedule #99\n");
}
