// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use nv_core::{Configuration, ConfigurationUpdate, Result};

use super::body;
use crate::transport::{ApiClient, Method};

/// Client for the `/configuration` singleton. There is no create or delete.
#[derive(Clone)]
pub struct ConfigurationApi {
    client: ApiClient,
}

impl ConfigurationApi {
    pub fn new(client: ApiClient) -> Self {
        ConfigurationApi { client }
    }

    pub async fn get(&self) -> Result<Configuration> {
        self.client
            .send_json(Method::Get, "/configuration", vec![], None)
            .await
    }

    pub async fn update(&self, id: i64, update: &ConfigurationUpdate) -> Result<Configuration> {
        self.client
            .send_json(
                Method::Put,
                &format!("/configuration/{id}"),
                vec![],
                Some(body(update)?),
            )
            .await
    }
}
