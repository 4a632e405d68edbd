// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured cache keys.
//!
//! A key is a path of segments from a resource family down to a single
//! entity or filtered list, e.g. `applicants/detail/7` or
//! `re-schedules/applicant/42/{limit=5}`. A [`KeyPattern`] matches every
//! key it is a prefix of, so invalidating `applicants/list` covers every
//! page of the list without enumerating filters.

use std::fmt;

use nv_core::{ApplicantId, ListParams, ReScheduleId};

/// One component of a [`QueryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Str(&'static str),
    Id(i64),
    Page(ListParams),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Str(s) => f.write_str(s),
            Segment::Id(id) => write!(f, "{id}"),
            Segment::Page(params) => {
                let parts: Vec<String> = params
                    .to_query()
                    .into_iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect();
                write!(f, "{{{}}}", parts.join(","))
            }
        }
    }
}

/// Identifies one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<Segment>);

impl QueryKey {
    pub fn root(family: &'static str) -> Self {
        QueryKey(vec![Segment::Str(family)])
    }

    pub fn child(mut self, name: &'static str) -> Self {
        self.0.push(Segment::Str(name));
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.0.push(Segment::Id(id));
        self
    }

    pub fn page(mut self, params: ListParams) -> Self {
        self.0.push(Segment::Page(params));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns true if `prefix` is a leading run of this key's segments.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A key prefix selecting a family of entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern(QueryKey);

impl KeyPattern {
    pub fn matches(&self, key: &QueryKey) -> bool {
        key.starts_with(&self.0)
    }
}

impl From<QueryKey> for KeyPattern {
    fn from(key: QueryKey) -> Self {
        KeyPattern(key)
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/*", self.0)
    }
}

pub mod applicants {
    use super::*;

    pub fn all() -> QueryKey {
        QueryKey::root("applicants")
    }

    pub fn lists() -> QueryKey {
        all().child("list")
    }

    pub fn list(params: ListParams) -> QueryKey {
        lists().page(params)
    }

    pub fn details() -> QueryKey {
        all().child("detail")
    }

    pub fn detail(id: ApplicantId) -> QueryKey {
        details().id(id)
    }
}

pub mod reschedules {
    use super::*;

    pub fn all() -> QueryKey {
        QueryKey::root("re-schedules")
    }

    pub fn lists() -> QueryKey {
        all().child("list")
    }

    pub fn list(params: ListParams) -> QueryKey {
        lists().page(params)
    }

    pub fn details() -> QueryKey {
        all().child("detail")
    }

    pub fn detail(id: ReScheduleId) -> QueryKey {
        details().id(id)
    }

    /// Every attempt list of one applicant, whatever the limit.
    pub fn for_applicant(applicant: ApplicantId) -> QueryKey {
        all().child("applicant").id(applicant)
    }

    pub fn by_applicant(applicant: ApplicantId, limit: Option<u32>) -> QueryKey {
        for_applicant(applicant).page(ListParams::new(limit, None))
    }
}

pub mod configuration {
    use super::*;

    pub fn all() -> QueryKey {
        QueryKey::root("configuration")
    }

    pub fn detail() -> QueryKey {
        all().child("detail")
    }
}
