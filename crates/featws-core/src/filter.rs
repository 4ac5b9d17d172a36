//! Pure derivation of the visible rule subset.
//!
//! Filtering is always re-derived from the full collection held by the
//! record store, never from a previously filtered result, so criteria can
//! never compound irreversibly. The output is an order-preserving
//! subsequence of the input.

use featws_model::{FilterCriteria, Rule};

/// True if the rule satisfies every populated criterion field exactly.
///
/// `code` is matched against the rule identifier; `status` against the
/// canonical status label. An unrecognized status value simply matches
/// nothing, it is never an error.
pub fn matches(rule: &Rule, criteria: &FilterCriteria) -> bool {
    if !criteria.code.is_empty() && rule.id.as_str() != criteria.code {
        return false;
    }
    if !criteria.author.is_empty() && rule.author != criteria.author {
        return false;
    }
    if !criteria.status.is_empty() && rule.status.as_str() != criteria.status {
        return false;
    }
    true
}

/// Derive the visible subset from the full collection and the criteria.
pub fn apply(rules: &[Rule], criteria: &FilterCriteria) -> Vec<Rule> {
    rules
        .iter()
        .filter(|rule| matches(rule, criteria))
        .cloned()
        .collect()
}

/// True iff at least one criterion field is populated.
///
/// Drives the filter-bar visibility only; it is not part of the filtering
/// computation itself.
pub fn is_active(criteria: &FilterCriteria) -> bool {
    !criteria.is_empty()
}

/// Unique rule codes (identifiers) in first-appearance order, for the
/// code filter dropdown.
pub fn code_options(rules: &[Rule]) -> Vec<String> {
    let mut seen = Vec::new();
    for rule in rules {
        if !seen.iter().any(|code| code == rule.id.as_str()) {
            seen.push(rule.id.as_str().to_string());
        }
    }
    seen
}

/// Unique authors in first-appearance order, for the author filter dropdown.
pub fn author_options(rules: &[Rule]) -> Vec<String> {
    let mut seen = Vec::new();
    for rule in rules {
        if !seen.contains(&rule.author) {
            seen.push(rule.author.clone());
        }
    }
    seen
}
