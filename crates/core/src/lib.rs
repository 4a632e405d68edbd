// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nv-core: Shared types for the nextvisa console
//!
//! This crate provides the entities exchanged with the backend API, the
//! re-schedule status model, and the error taxonomy. It performs no I/O.

pub mod applicant;
pub mod configuration;
pub mod error;
pub mod params;
pub mod reschedule;
pub mod status;
pub mod time;

pub use applicant::{Applicant, ApplicantCreate, ApplicantId, ApplicantUpdate, CredentialCheck};
pub use configuration::{Configuration, ConfigurationUpdate, CONFIGURATION_FIELDS};
pub use error::{ApiError, Result};
pub use params::ListParams;
pub use reschedule::{ReSchedule, ReScheduleCreate, ReScheduleId, ReScheduleUpdate};
pub use status::{ScheduleStatus, StatusIndicator};
