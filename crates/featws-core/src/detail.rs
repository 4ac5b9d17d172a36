//! The sheet detail controller.
//!
//! One parameterized controller replaces the two near-duplicate detail
//! views (the read-only sheet view filtering by status, and the deferral
//! view filtering by code with checkbox selection). It owns the record
//! store, the draft and applied filter criteria, the selection and the
//! paging contract, and communicates with the outside world through
//! messages in and effects out. The rendering surface stays a passive
//! consumer of [`GridProps`].

use featws_model::{FilterCriteria, Rule, RuleId, RuleSheet, SheetId};
use tracing::debug;

use crate::filter;
use crate::grid::GridProps;
use crate::nav::NavigationIntent;
use crate::pagination::{PageSize, Pagination};
use crate::presentation::RuleRow;
use crate::selection::SelectionTracker;
use crate::store::{LoadRequest, LoadState, RecordStore, RetrievalError};

/// Full collections of up to this many rules render without a filter bar.
const FILTER_BAR_THRESHOLD: usize = 10;

/// User interaction and retrieval callbacks consumed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailMessage {
    /// The view wants the sheet (mount or user-initiated retry).
    LoadRequested,
    /// The retrieval boundary finished the fetch tagged with `epoch`.
    LoadCompleted {
        epoch: u64,
        result: Result<RuleSheet, RetrievalError>,
    },
    CodeFilterChanged(String),
    AuthorFilterChanged(String),
    StatusFilterChanged(String),
    /// Apply the draft criteria to the full collection.
    SearchSubmitted,
    /// Checkbox toggle on one rendered row.
    RowToggled(RuleId),
    /// The grid replaced its whole selection model.
    SelectionReplaced(Vec<RuleId>),
    ClearSelection,
    PageSizeChanged(PageSize),
    BackClicked,
    RuleClicked(RuleId),
    /// Batch action over the current selection.
    AdvanceClicked,
}

/// Work the environment must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Perform the asynchronous fetch and report back via
    /// [`DetailMessage::LoadCompleted`] with the same epoch.
    FetchSheet { sheet_id: SheetId, epoch: u64 },
    Navigate(NavigationIntent),
    /// Hand the selected rule identifiers to the deferral action.
    Advance { selection: Vec<RuleId> },
}

/// State of one sheet detail view session.
#[derive(Debug, Clone)]
pub struct SheetDetail {
    sheet_id: SheetId,
    store: RecordStore,
    /// Criteria being edited in the filter bar.
    draft: FilterCriteria,
    /// Criteria last applied by a search.
    applied: FilterCriteria,
    /// Visible subset, always re-derived from the full collection.
    visible: Vec<Rule>,
    selection: SelectionTracker,
    pagination: Pagination,
    checkbox_selection: bool,
}

impl SheetDetail {
    /// Controller for the read-only detail view (no checkbox column).
    pub fn new(sheet_id: SheetId) -> Self {
        Self::with_selection(sheet_id, false)
    }

    /// Controller for the deferral view, with checkbox selection enabled.
    pub fn for_deferral(sheet_id: SheetId) -> Self {
        Self::with_selection(sheet_id, true)
    }

    fn with_selection(sheet_id: SheetId, checkbox_selection: bool) -> Self {
        Self {
            sheet_id,
            store: RecordStore::new(),
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            visible: Vec::new(),
            selection: SelectionTracker::new(),
            pagination: Pagination::new(),
            checkbox_selection,
        }
    }

    pub fn update(&mut self, message: DetailMessage) -> Vec<Effect> {
        match message {
            DetailMessage::LoadRequested => match self.store.begin_load() {
                LoadRequest::Started { epoch } => vec![Effect::FetchSheet {
                    sheet_id: self.sheet_id.clone(),
                    epoch,
                }],
                LoadRequest::DuplicateSuppressed => Vec::new(),
            },

            DetailMessage::LoadCompleted { epoch, result } => {
                if self.store.complete(epoch, result) {
                    self.publish_baseline();
                }
                Vec::new()
            }

            DetailMessage::CodeFilterChanged(code) => {
                self.draft.code = code;
                Vec::new()
            }

            DetailMessage::AuthorFilterChanged(author) => {
                self.draft.author = author;
                Vec::new()
            }

            DetailMessage::StatusFilterChanged(status) => {
                self.draft.status = status;
                Vec::new()
            }

            DetailMessage::SearchSubmitted => {
                self.apply_filter();
                Vec::new()
            }

            DetailMessage::RowToggled(id) => {
                self.selection.toggle(&id, &self.visible);
                Vec::new()
            }

            DetailMessage::SelectionReplaced(ids) => {
                self.selection.replace(ids, &self.visible);
                Vec::new()
            }

            DetailMessage::ClearSelection => {
                self.selection.clear();
                Vec::new()
            }

            DetailMessage::PageSizeChanged(size) => {
                // Only the paging contract moves; filter and selection stay.
                self.pagination.set_page_size(size);
                Vec::new()
            }

            DetailMessage::BackClicked => {
                vec![Effect::Navigate(NavigationIntent::SheetList)]
            }

            DetailMessage::RuleClicked(id) => {
                vec![Effect::Navigate(NavigationIntent::Rule(id))]
            }

            DetailMessage::AdvanceClicked => {
                if self.selection.is_empty() {
                    return Vec::new();
                }
                vec![Effect::Advance {
                    selection: self.selection.to_vec(),
                }]
            }
        }
    }

    /// A freshly loaded sheet publishes its full collection as the
    /// "no filter" baseline; criteria and selection from the previous
    /// sheet instance are discarded along with it.
    fn publish_baseline(&mut self) {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        self.selection.clear();
        self.visible = self
            .store
            .state()
            .sheet()
            .map(|sheet| sheet.rules.clone())
            .unwrap_or_default();
    }

    fn apply_filter(&mut self) {
        let Some(sheet) = self.store.state().sheet() else {
            return;
        };
        self.applied = self.draft.clone();
        self.visible = filter::apply(&sheet.rules, &self.applied);
        debug!(
            visible = self.visible.len(),
            total = sheet.rules.len(),
            filtering = self.is_filtering(),
            "filter applied"
        );
        self.selection.retain_visible(&self.visible);
    }

    pub fn sheet_id(&self) -> &SheetId {
        &self.sheet_id
    }

    pub fn load_state(&self) -> &LoadState {
        self.store.state()
    }

    /// The visible (filtered) rule collection, in original order.
    pub fn rules(&self) -> &[Rule] {
        &self.visible
    }

    /// Criteria currently shown in the filter bar inputs.
    pub fn draft_criteria(&self) -> &FilterCriteria {
        &self.draft
    }

    /// True iff the criteria in force populate at least one field.
    pub fn is_filtering(&self) -> bool {
        filter::is_active(&self.applied)
    }

    /// The filter bar renders when a filter is in force or the full
    /// collection is too large to show on one default page.
    pub fn filter_bar_visible(&self) -> bool {
        let total = self
            .store
            .state()
            .sheet()
            .map(|sheet| sheet.rules.len())
            .unwrap_or(0);
        self.is_filtering() || total > FILTER_BAR_THRESHOLD
    }

    /// Dropdown options for the code filter, from the full collection.
    pub fn code_options(&self) -> Vec<String> {
        self.store
            .state()
            .sheet()
            .map(|sheet| filter::code_options(&sheet.rules))
            .unwrap_or_default()
    }

    /// Dropdown options for the author filter, from the full collection.
    pub fn author_options(&self) -> Vec<String> {
        self.store
            .state()
            .sheet()
            .map(|sheet| filter::author_options(&sheet.rules))
            .unwrap_or_default()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Everything the rendering surface needs for the current frame.
    pub fn grid_props(&self) -> GridProps {
        let rows = self
            .visible
            .iter()
            .map(|rule| RuleRow::from_rule(rule, self.selection.contains(&rule.id)))
            .collect();
        GridProps::new(rows, self.pagination.page_size(), self.checkbox_selection)
    }
}
