//! Fixture-backed retrieval client.
//!
//! Stands in for the rule sheet backend until the real API lands: serves
//! the "Internet APF" sheet after a configurable artificial delay, the way
//! the view prototypes did with a two-second timer.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use featws_core::store::{RetrievalError, SheetRepository};
use featws_model::{Rule, RuleId, RuleSheet, RuleStatus, SheetId, SheetSummary};
use tracing::debug;

/// Simulated backend latency of the prototype views.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Repository serving a static fixture sheet for any requested id.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    delay: Duration,
}

impl Default for FixtureClient {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client with a custom delay; tests use `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The rule-sheet overview fixture.
    pub async fn list_rule_sheets(&self) -> Result<Vec<SheetSummary>, RetrievalError> {
        tokio::time::sleep(self.delay).await;
        debug!("serving fixture sheet list");
        Ok(fixture_summaries())
    }
}

impl SheetRepository for FixtureClient {
    async fn fetch_rule_sheet(&self, id: &SheetId) -> Result<RuleSheet, RetrievalError> {
        tokio::time::sleep(self.delay).await;
        debug!(sheet = %id, "serving fixture rule sheet");
        Ok(fixture_sheet(id))
    }
}

fn fixture_rule(n: u32) -> Rule {
    Rule {
        id: RuleId::new(n.to_string()).expect("fixture rule id"),
        title: "Alteração no Bundle".to_string(),
        date: Utc.with_ymd_and_hms(2022, 2, 2, 10, 55, 30).unwrap(),
        author: "C1313233 Rhuan Queiroz".to_string(),
        status: RuleStatus::AwaitingDeferral,
    }
}

/// The eleven-rule "Internet APF" sheet from the deferral prototype.
pub fn fixture_sheet(id: &SheetId) -> RuleSheet {
    RuleSheet {
        id: id.clone(),
        name: "Internet APF".to_string(),
        slug: "internet-apf".to_string(),
        description: "É uma plataforma de onboarding para não correntistas e correntistas \
                      PF/PJ e GOV."
            .to_string(),
        code: "12345678".to_string(),
        rules: (1..=11).map(fixture_rule).collect(),
    }
}

fn fixture_summaries() -> Vec<SheetSummary> {
    let updated_at = Utc.with_ymd_and_hms(2022, 1, 20, 10, 55, 30).unwrap();
    let mut sheets = vec![SheetSummary {
        id: SheetId::new("1").expect("fixture sheet id"),
        name: "Internet APF".to_string(),
        responsible: "Onboarding BB".to_string(),
        code: "12345678".to_string(),
        updated_at,
    }];
    for n in 2..=10 {
        sheets.push(SheetSummary {
            id: SheetId::new(n.to_string()).expect("fixture sheet id"),
            name: "EBB Minha Página".to_string(),
            responsible: "Onboarding BB".to_string(),
            code: if n == 2 { "23456781" } else { "Conteúdo" }.to_string(),
            updated_at,
        });
    }
    sheets
}
