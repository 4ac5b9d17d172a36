//! User-supplied filter criteria.

use serde::{Deserialize, Serialize};

/// Equality constraints narrowing the visible rule collection.
///
/// A conjunction: a rule matches only if every populated field equals the
/// corresponding rule field exactly. An empty string means "no constraint
/// on that field", never "match only empty values". `code` constrains the
/// rule identifier; `status` is compared against the canonical status label,
/// so an unrecognized status matches nothing rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub code: String,
    pub author: String,
    pub status: String,
}

impl FilterCriteria {
    /// True when no field is populated, i.e. the criteria impose nothing.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.author.is_empty() && self.status.is_empty()
    }
}
