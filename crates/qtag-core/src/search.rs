//! Search criteria and the fixed result window.

use serde::{Deserialize, Serialize};

use crate::enums::Operator;

/// Offset of the first result requested from the platform (1-based).
pub const START_FROM_OFFSET: u32 = 1;

/// Number of results requested per search. qtag does not paginate.
pub const LIMIT_RESULTS: u32 = 10;

/// One filter criterion. The platform ANDs all criteria of a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriterion {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl SearchCriterion {
    #[must_use]
    pub fn contains(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: Operator::Contains,
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn equals(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: Operator::Equals,
            value: value.to_string(),
        }
    }
}

/// Result window of a search request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPreferences {
    pub start_from_offset: u32,
    pub limit_results: u32,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            start_from_offset: START_FROM_OFFSET,
            limit_results: LIMIT_RESULTS,
        }
    }
}

/// `filters` block of a search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    #[serde(rename = "Criteria")]
    pub criteria: Vec<SearchCriterion>,
}

/// Body of a search request, placed inside the `ServiceRequest` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub preferences: SearchPreferences,
    pub filters: SearchFilters,
}

impl SearchRequest {
    /// Search request with the fixed preferences and the given criteria.
    #[must_use]
    pub fn new(criteria: Vec<SearchCriterion>) -> Self {
        Self {
            preferences: SearchPreferences::default(),
            filters: SearchFilters { criteria },
        }
    }
}
