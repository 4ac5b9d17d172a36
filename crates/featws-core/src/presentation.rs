//! Presentation mapping: status indicators and display rows.
//!
//! The status bullet colors come from the product theme. The mapping is
//! total: any status outside the declared enum resolves to a defined
//! `Unknown` indicator, never to an absent color.

use chrono::{DateTime, Utc};
use featws_model::{Rule, RuleStatus};

/// Visual indicator rendered next to the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIndicator {
    /// Deferred: the rule was approved.
    Success,
    /// Awaiting deferral: pending review.
    Info,
    /// Draft: not yet submitted.
    Attention,
    /// Anything outside the declared status enum.
    Unknown,
}

impl StatusIndicator {
    /// Theme color of the bullet.
    pub fn hex(&self) -> &'static str {
        match self {
            StatusIndicator::Success => "#16C559",
            StatusIndicator::Info => "#07B4F2",
            StatusIndicator::Attention => "#F97A70",
            StatusIndicator::Unknown => "#9E9E9E",
        }
    }
}

impl From<RuleStatus> for StatusIndicator {
    fn from(status: RuleStatus) -> Self {
        match status {
            RuleStatus::Deferred => StatusIndicator::Success,
            RuleStatus::AwaitingDeferral => StatusIndicator::Info,
            RuleStatus::Draft => StatusIndicator::Attention,
        }
    }
}

/// Indicator for a raw status label, e.g. one taken straight off the wire.
pub fn indicator_for_label(label: &str) -> StatusIndicator {
    label
        .parse::<RuleStatus>()
        .map(StatusIndicator::from)
        .unwrap_or(StatusIndicator::Unknown)
}

/// Format a point in time for grid display.
///
/// The model keeps dates as `DateTime<Utc>`; this is the only place they
/// become strings.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// A rule prepared for display: formatted date, status label, indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub status: String,
    pub indicator: StatusIndicator,
    pub selected: bool,
}

impl RuleRow {
    pub fn from_rule(rule: &Rule, selected: bool) -> Self {
        Self {
            id: rule.id.as_str().to_string(),
            title: rule.title.clone(),
            date: format_date(&rule.date),
            author: rule.author.clone(),
            status: rule.status.as_str().to_string(),
            indicator: StatusIndicator::from(rule.status),
            selected,
        }
    }
}
