//! Retrieval boundary implementations.
//!
//! The core consumes `SheetRepository` as an opaque asynchronous call;
//! this crate provides the concrete clients plus the bounded-timeout
//! wrapper every production fetch goes through.

pub mod fixture;

use std::time::Duration;

use featws_core::store::{RetrievalError, SheetRepository};
use featws_model::{RuleSheet, SheetId};
use tracing::{info, warn};

pub use fixture::{DEFAULT_DELAY, FixtureClient};

/// Fetch a sheet with a bounded timeout.
///
/// Expiry is reported as [`RetrievalError::TimedOut`]; upstream the record
/// store turns that into a `Failed` state with a retry affordance.
pub async fn load_with_timeout<R: SheetRepository>(
    repository: &R,
    id: &SheetId,
    timeout: Duration,
) -> Result<RuleSheet, RetrievalError> {
    let timeout_ms = timeout.as_millis() as u64;
    match tokio::time::timeout(timeout, repository.fetch_rule_sheet(id)).await {
        Ok(Ok(sheet)) => {
            info!(sheet = %id, rules = sheet.rules.len(), "rule sheet fetched");
            Ok(sheet)
        }
        Ok(Err(error)) => {
            warn!(sheet = %id, %error, "rule sheet fetch failed");
            Err(error)
        }
        Err(_) => {
            warn!(sheet = %id, timeout_ms, "rule sheet fetch timed out");
            Err(RetrievalError::TimedOut { timeout_ms })
        }
    }
}
