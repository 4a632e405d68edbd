// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination parameters for list endpoints.

use serde::{Deserialize, Serialize};

/// `limit`/`offset` filter. Zero counts as absent and is never sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListParams {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        ListParams {
            limit: limit.filter(|n| *n > 0),
            offset: offset.filter(|n| *n > 0),
        }
    }

    /// Query-string pairs in a stable order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_produce_no_query() {
        assert!(ListParams::default().to_query().is_empty());
        assert!(ListParams::new(Some(0), Some(0)).to_query().is_empty());
    }

    #[test]
    fn query_is_ordered_limit_then_offset() {
        let query = ListParams::new(Some(20), Some(40)).to_query();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "40".to_string())
            ]
        );
    }

    #[test]
    fn zero_normalizes_to_none() {
        assert_eq!(ListParams::new(Some(0), None), ListParams::default());
    }
}
