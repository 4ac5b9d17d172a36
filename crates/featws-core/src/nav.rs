//! Navigation intents issued by the controllers.
//!
//! The core never touches URLs; it emits intents that an external router
//! consumes.

use featws_model::{RuleId, SheetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Back to the rule-sheet overview list.
    SheetList,
    /// Open one sheet's detail view.
    SheetDetail(SheetId),
    /// Open the sheet creation flow.
    CreateSheet,
    /// Open one rule.
    Rule(RuleId),
}
