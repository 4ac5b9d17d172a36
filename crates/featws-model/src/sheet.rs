//! Rule sheets and their rules.
//!
//! A `RuleSheet` is the parent grouping of rules for one onboarding or
//! product surface. It is produced whole by the retrieval boundary and
//! replaced wholesale on (re)load; nothing in the UI mutates it in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{RuleId, SheetId};
use crate::status::RuleStatus;

/// A single governed change request belonging to a rule sheet.
///
/// Immutable once loaded; the UI only reads and filters rules. Dates are
/// kept as points in time and formatted only at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub author: String,
    pub status: RuleStatus,
}

/// The parent grouping of rules, loaded for one detail-view session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSheet {
    pub id: SheetId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub code: String,
    pub rules: Vec<Rule>,
}

/// One row of the rule-sheet overview list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub id: SheetId,
    pub name: String,
    pub responsible: String,
    pub code: String,
    pub updated_at: DateTime<Utc>,
}
