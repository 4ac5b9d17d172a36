//! Review lifecycle status of a rule.
//!
//! A rule passes through draft -> awaiting deferral -> deferred. The
//! canonical labels are the Portuguese strings used by the backend and
//! shown verbatim in the UI; the enum keeps matching type-safe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Review status of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleStatus {
    /// Not yet submitted for review.
    Draft,
    /// Submitted and pending the deferral decision.
    AwaitingDeferral,
    /// Approved by the reviewer.
    Deferred,
}

impl RuleStatus {
    /// Canonical label as stored by the backend and displayed in the grid.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Draft => "Rascunho",
            RuleStatus::AwaitingDeferral => "Aguardando deferimento",
            RuleStatus::Deferred => "Deferida",
        }
    }

    /// All statuses in lifecycle order.
    pub fn all() -> [RuleStatus; 3] {
        [
            RuleStatus::Draft,
            RuleStatus::AwaitingDeferral,
            RuleStatus::Deferred,
        ]
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Rascunho" => Ok(RuleStatus::Draft),
            "Aguardando deferimento" => Ok(RuleStatus::AwaitingDeferral),
            "Deferida" => Ok(RuleStatus::Deferred),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for RuleStatus {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleStatus> for String {
    fn from(status: RuleStatus) -> Self {
        status.as_str().to_string()
    }
}
