// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use nv_core::{
    Applicant, ApplicantCreate, ApplicantId, ApplicantUpdate, CredentialCheck, ListParams, Result,
};

use super::body;
use crate::transport::{ApiClient, Method};

/// Client for `/applicants`.
#[derive(Clone)]
pub struct ApplicantsApi {
    client: ApiClient,
}

impl ApplicantsApi {
    pub fn new(client: ApiClient) -> Self {
        ApplicantsApi { client }
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<Applicant>> {
        self.client
            .send_json(Method::Get, "/applicants", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: ApplicantId) -> Result<Applicant> {
        self.client
            .send_json(Method::Get, &format!("/applicants/{id}"), vec![], None)
            .await
    }

    pub async fn create(&self, draft: &ApplicantCreate) -> Result<Applicant> {
        self.client
            .send_json(Method::Post, "/applicants", vec![], Some(body(draft)?))
            .await
    }

    pub async fn update(&self, id: ApplicantId, patch: &ApplicantUpdate) -> Result<Applicant> {
        self.client
            .send_json(
                Method::Put,
                &format!("/applicants/{id}"),
                vec![],
                Some(body(patch)?),
            )
            .await
    }

    pub async fn delete(&self, id: ApplicantId) -> Result<()> {
        self.client
            .send(Method::Delete, &format!("/applicants/{id}"), vec![], None)
            .await
            .map(|_| ())
    }

    /// Ask the backend to sign in with the stored credentials.
    ///
    /// A failed sign-in is reported in the body (`success: false`), not as
    /// an HTTP error.
    pub async fn test_credentials(&self, id: ApplicantId) -> Result<CredentialCheck> {
        self.client
            .send_json(
                Method::Post,
                &format!("/applicants/{id}/test-credentials"),
                vec![],
                None,
            )
            .await
    }
}
