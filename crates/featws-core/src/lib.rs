//! Core logic of the FeatWS rule review interface.
//!
//! Everything a detail view needs short of actual rendering: the record
//! store and its load lifecycle, the pure filter engine, multi-row
//! selection, the client-side paging contract and the presentation
//! mapping from statuses to indicators. Rendering surfaces (terminal,
//! desktop, web) consume [`grid::GridProps`] and feed interaction back as
//! [`detail::DetailMessage`]s.

pub mod detail;
pub mod filter;
pub mod grid;
pub mod list;
pub mod nav;
pub mod pagination;
pub mod presentation;
pub mod selection;
pub mod store;

pub use detail::{DetailMessage, Effect, SheetDetail};
pub use grid::{ColumnSpec, GridProps};
pub use list::{SheetList, SheetRow};
pub use nav::NavigationIntent;
pub use pagination::{PAGE_SIZE_OPTIONS, PageSize, Pagination};
pub use presentation::{RuleRow, StatusIndicator};
pub use selection::SelectionTracker;
pub use store::{LoadRequest, LoadState, RecordStore, RetrievalError, SheetRepository};
