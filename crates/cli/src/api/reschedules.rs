// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use nv_core::{
    ApplicantId, ListParams, ReSchedule, ReScheduleCreate, ReScheduleId, ReScheduleUpdate, Result,
};

use super::body;
use crate::transport::{ApiClient, Method};

/// Client for `/re-schedules`.
#[derive(Clone)]
pub struct ReSchedulesApi {
    client: ApiClient,
}

impl ReSchedulesApi {
    pub fn new(client: ApiClient) -> Self {
        ReSchedulesApi { client }
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<ReSchedule>> {
        self.client
            .send_json(Method::Get, "/re-schedules", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: ReScheduleId) -> Result<ReSchedule> {
        self.client
            .send_json(Method::Get, &format!("/re-schedules/{id}"), vec![], None)
            .await
    }

    /// Attempts owned by one applicant, newest first as the backend orders them.
    pub async fn by_applicant(
        &self,
        applicant: ApplicantId,
        limit: Option<u32>,
    ) -> Result<Vec<ReSchedule>> {
        let query = ListParams::new(limit, None).to_query();
        self.client
            .send_json(
                Method::Get,
                &format!("/re-schedules/applicant/{applicant}"),
                query,
                None,
            )
            .await
    }

    pub async fn create(&self, draft: &ReScheduleCreate) -> Result<ReSchedule> {
        self.client
            .send_json(Method::Post, "/re-schedules", vec![], Some(body(draft)?))
            .await
    }

    pub async fn update(&self, id: ReScheduleId, patch: &ReScheduleUpdate) -> Result<ReSchedule> {
        self.client
            .send_json(
                Method::Put,
                &format!("/re-schedules/{id}"),
                vec![],
                Some(body(patch)?),
            )
            .await
    }

    pub async fn delete(&self, id: ReScheduleId) -> Result<()> {
        self.client
            .send(Method::Delete, &format!("/re-schedules/{id}"), vec![], None)
            .await
            .map(|_| ())
    }
}
