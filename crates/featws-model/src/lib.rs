pub mod criteria;
pub mod error;
pub mod ids;
pub mod sheet;
pub mod status;

pub use criteria::FilterCriteria;
pub use error::{ModelError, Result};
pub use ids::{RuleId, SheetId};
pub use sheet::{Rule, RuleSheet, SheetSummary};
pub use status::RuleStatus;
