// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument groups shared by several commands.

use clap::Args;
use nv_core::{ApplicantUpdate, ListParams};

/// Pagination for list commands.
#[derive(Args, Clone, Debug, Default)]
pub struct PageArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

impl PageArgs {
    pub fn params(&self) -> ListParams {
        ListParams::new(self.limit, self.offset)
    }
}

/// Optional applicant fields, shared by `applicant new` and `applicant edit`.
#[derive(Args, Clone, Debug, Default)]
pub struct ApplicantFieldArgs {
    /// Current appointment date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub schedule_date: Option<String>,

    /// Earliest acceptable new date
    #[arg(long, value_name = "DATE")]
    pub min_date: Option<String>,

    /// Latest acceptable new date
    #[arg(long, value_name = "DATE")]
    pub max_date: Option<String>,

    /// Schedule number on the appointment portal
    #[arg(long)]
    pub schedule: Option<String>,
}

impl ApplicantFieldArgs {
    /// Copy the optional fields into an update patch.
    pub fn apply(self, patch: &mut ApplicantUpdate) {
        patch.schedule_date = self.schedule_date;
        patch.min_date = self.min_date;
        patch.max_date = self.max_date;
        patch.schedule = self.schedule;
    }
}
