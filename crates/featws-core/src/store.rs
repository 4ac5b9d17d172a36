//! Record store: load lifecycle of one rule sheet.
//!
//! The store is a synchronous state machine; the asynchronous retrieval
//! itself happens at the boundary (see `SheetRepository`) and reports back
//! through [`RecordStore::complete`]. Each accepted load increments an
//! epoch, and completions carrying a stale epoch are dropped, which covers
//! both the duplicate-load guard and the teardown/cancellation contract:
//! a completion that arrives after the view moved on is a no-op.

use featws_model::{RuleSheet, SheetId};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure of the external retrieval boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("rule sheet {id} not found")]
    NotFound { id: SheetId },
    #[error("retrieval timed out after {timeout_ms} ms")]
    TimedOut { timeout_ms: u64 },
    #[error("transport failure: {reason}")]
    Transport { reason: String },
}

/// The opaque asynchronous retrieval boundary.
///
/// The core consumes this contract and handles both outcomes; how the
/// fetch is implemented (network, fixture, cache) is not its concern.
pub trait SheetRepository {
    fn fetch_rule_sheet(
        &self,
        id: &SheetId,
    ) -> impl Future<Output = Result<RuleSheet, RetrievalError>> + Send;
}

/// Load lifecycle of the record store.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// A fetch is in flight; no second fetch may be issued.
    Loading,
    /// The sheet is available.
    Loaded(RuleSheet),
    /// The last fetch failed; retry is a user-initiated new load.
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn sheet(&self) -> Option<&RuleSheet> {
        match self {
            LoadState::Loaded(sheet) => Some(sheet),
            _ => None,
        }
    }
}

/// Outcome of asking the store to start a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    /// A fetch should be performed, tagged with this epoch.
    Started { epoch: u64 },
    /// A fetch is already in flight; explicitly a no-op, not an error.
    DuplicateSuppressed,
}

/// Owns the currently loaded rule sheet and its load-state transitions.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    state: LoadState,
    epoch: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Transition to `Loading` unless a fetch is already in flight.
    ///
    /// Loads from `Loaded` or `Failed` start over: the sheet is replaced
    /// wholesale when the new fetch completes.
    pub fn begin_load(&mut self) -> LoadRequest {
        if self.state.is_loading() {
            debug!(epoch = self.epoch, "load already in flight, suppressing");
            return LoadRequest::DuplicateSuppressed;
        }
        self.epoch += 1;
        self.state = LoadState::Loading;
        debug!(epoch = self.epoch, "load started");
        LoadRequest::Started { epoch: self.epoch }
    }

    /// Apply the result of the fetch tagged with `epoch`.
    ///
    /// Returns `false` when the completion is stale (a newer load has
    /// started, or the store was reset) and was ignored.
    pub fn complete(&mut self, epoch: u64, result: Result<RuleSheet, RetrievalError>) -> bool {
        if epoch != self.epoch || !self.state.is_loading() {
            debug!(
                stale = epoch,
                current = self.epoch,
                "ignoring stale load completion"
            );
            return false;
        }
        match result {
            Ok(sheet) => {
                info!(sheet = %sheet.id, rules = sheet.rules.len(), "rule sheet loaded");
                self.state = LoadState::Loaded(sheet);
            }
            Err(error) => {
                warn!(%error, "rule sheet load failed");
                self.state = LoadState::Failed {
                    reason: error.to_string(),
                };
            }
        }
        true
    }

    /// Discard any loaded sheet and invalidate in-flight completions.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = LoadState::Idle;
    }
}
