// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console operations bound to cache keys.
//!
//! Every read names its key and freshness window, every write names the
//! entries it makes stale. Presentation code goes through this type and
//! never touches the resource clients directly.

use std::time::Duration;

use nv_core::{
    Applicant, ApplicantCreate, ApplicantId, ApplicantUpdate, Configuration, ConfigurationUpdate,
    CredentialCheck, ListParams, ReSchedule, ReScheduleCreate, ReScheduleId, ReScheduleUpdate,
    Result,
};
use tracing::info;

use super::cache::{QueryCache, QueryOptions};
use super::keys::{self, KeyPattern};
use super::retry::RetryPolicy;
use super::state::QueryState;
use crate::api::Api;

/// Freshness and retry settings for console reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Freshness window for applicant reads.
    pub applicant_stale_after: Duration,
    pub retry: RetryPolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            applicant_stale_after: Duration::from_secs(5 * 60),
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Clone)]
pub struct ConsoleStore {
    api: Api,
    cache: QueryCache,
    settings: StoreSettings,
}

impl ConsoleStore {
    pub fn new(api: Api, cache: QueryCache, settings: StoreSettings) -> Self {
        ConsoleStore {
            api,
            cache,
            settings,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn applicant_options(&self) -> QueryOptions {
        QueryOptions::new()
            .stale_after(self.settings.applicant_stale_after)
            .retry(self.settings.retry)
    }

    /// Attempt statuses change underneath the console, so they are always
    /// refreshed on read.
    fn reschedule_options(&self) -> QueryOptions {
        QueryOptions::new().retry(self.settings.retry)
    }

    // Applicants

    pub async fn applicants(&self, params: ListParams) -> QueryState<Vec<Applicant>> {
        let api = self.api.applicants.clone();
        self.cache
            .read(keys::applicants::list(params), self.applicant_options(), move || {
                let api = api.clone();
                async move { api.list(params).await }
            })
            .await
    }

    /// Disabled for id 0.
    pub async fn applicant(&self, id: ApplicantId) -> QueryState<Applicant> {
        let api = self.api.applicants.clone();
        let options = self.applicant_options().enabled(id != 0);
        self.cache
            .read(keys::applicants::detail(id), options, move || {
                let api = api.clone();
                async move { api.get(id).await }
            })
            .await
    }

    pub async fn create_applicant(&self, draft: &ApplicantCreate) -> Result<Applicant> {
        let created = self
            .cache
            .mutate(
                self.api.applicants.create(draft),
                vec![keys::applicants::lists().into()],
            )
            .await?;
        info!("created applicant {} ({})", created.id, created.email);
        Ok(created)
    }

    pub async fn update_applicant(&self, id: ApplicantId, patch: &ApplicantUpdate) -> Result<Applicant> {
        let updated = self
            .cache
            .mutate(
                self.api.applicants.update(id, patch),
                vec![
                    keys::applicants::detail(id).into(),
                    keys::applicants::lists().into(),
                ],
            )
            .await?;
        info!("updated applicant {}", id);
        Ok(updated)
    }

    pub async fn delete_applicant(&self, id: ApplicantId) -> Result<()> {
        self.cache
            .mutate(
                self.api.applicants.delete(id),
                vec![
                    keys::applicants::lists().into(),
                    keys::applicants::detail(id).into(),
                ],
            )
            .await?;
        info!("deleted applicant {}", id);
        Ok(())
    }

    /// The check may record a new schedule on the applicant and start an
    /// attempt, but never changes list membership.
    pub async fn test_credentials(&self, id: ApplicantId) -> Result<CredentialCheck> {
        let check = self
            .cache
            .mutate(
                self.api.applicants.test_credentials(id),
                vec![
                    keys::applicants::detail(id).into(),
                    keys::reschedules::for_applicant(id).into(),
                ],
            )
            .await?;
        info!("credential check for applicant {}: success={}", id, check.success);
        Ok(check)
    }

    // Re-schedules

    pub async fn reschedules(&self, params: ListParams) -> QueryState<Vec<ReSchedule>> {
        let api = self.api.reschedules.clone();
        self.cache
            .read(keys::reschedules::list(params), self.reschedule_options(), move || {
                let api = api.clone();
                async move { api.list(params).await }
            })
            .await
    }

    pub async fn reschedule(&self, id: ReScheduleId) -> QueryState<ReSchedule> {
        let api = self.api.reschedules.clone();
        let options = self.reschedule_options().enabled(id != 0);
        self.cache
            .read(keys::reschedules::detail(id), options, move || {
                let api = api.clone();
                async move { api.get(id).await }
            })
            .await
    }

    /// Disabled for applicant 0.
    pub async fn reschedules_for(
        &self,
        applicant: ApplicantId,
        limit: Option<u32>,
    ) -> QueryState<Vec<ReSchedule>> {
        let api = self.api.reschedules.clone();
        let options = self.reschedule_options().enabled(applicant != 0);
        self.cache
            .read(keys::reschedules::by_applicant(applicant, limit), options, move || {
                let api = api.clone();
                async move { api.by_applicant(applicant, limit).await }
            })
            .await
    }

    pub async fn create_reschedule(&self, draft: &ReScheduleCreate) -> Result<ReSchedule> {
        let applicant = draft.applicant;
        let created = self
            .cache
            .mutate(
                self.api.reschedules.create(draft),
                vec![
                    keys::reschedules::for_applicant(applicant).into(),
                    keys::reschedules::lists().into(),
                    keys::applicants::detail(applicant).into(),
                ],
            )
            .await?;
        info!("created re-schedule {} for applicant {}", created.id, applicant);
        Ok(created)
    }

    /// The owning applicant comes from the response, so its attempt lists
    /// are invalidated after the write lands.
    pub async fn update_reschedule(&self, id: ReScheduleId, patch: &ReScheduleUpdate) -> Result<ReSchedule> {
        let updated = self
            .cache
            .mutate_with(self.api.reschedules.update(id, patch), |updated: &ReSchedule| {
                vec![
                    keys::reschedules::detail(id).into(),
                    keys::reschedules::lists().into(),
                    keys::reschedules::for_applicant(updated.applicant).into(),
                ]
            })
            .await?;
        info!("updated re-schedule {}", id);
        Ok(updated)
    }

    /// The owner is not known client-side, so the whole family goes stale.
    pub async fn delete_reschedule(&self, id: ReScheduleId) -> Result<()> {
        self.cache
            .mutate(
                self.api.reschedules.delete(id),
                vec![keys::reschedules::all().into()],
            )
            .await?;
        info!("deleted re-schedule {}", id);
        Ok(())
    }

    // Configuration

    pub async fn configuration(&self) -> QueryState<Configuration> {
        let api = self.api.configuration.clone();
        let options = QueryOptions::new().retry(self.settings.retry);
        self.cache
            .read(keys::configuration::detail(), options, move || {
                let api = api.clone();
                async move { api.get().await }
            })
            .await
    }

    pub async fn update_configuration(&self, id: i64, update: &ConfigurationUpdate) -> Result<Configuration> {
        let saved = self
            .cache
            .mutate(
                self.api.configuration.update(id, update),
                vec![KeyPattern::from(keys::configuration::all())],
            )
            .await?;
        info!("updated configuration {}", id);
        Ok(saved)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
