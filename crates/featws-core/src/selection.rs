//! Multi-row selection over the rendered grid.
//!
//! Selection is a flat set of rule identifiers, not row objects: the
//! identifier is the stable join key between the filtered view and the
//! full collection. Identifiers not present in the known collection are
//! ignored rather than stored.

use std::collections::BTreeSet;

use featws_model::{Rule, RuleId};

/// The set of rule identifiers currently checked for batch action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<RuleId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one row. Unknown identifiers are ignored.
    ///
    /// Returns `true` when the id is selected after the call.
    pub fn toggle(&mut self, id: &RuleId, known: &[Rule]) -> bool {
        if self.selected.remove(id) {
            return false;
        }
        if known.iter().any(|rule| &rule.id == id) {
            self.selected.insert(id.clone());
            return true;
        }
        false
    }

    /// Replace the whole selection, dropping identifiers absent from the
    /// known collection (grid checkbox-model updates arrive this way).
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RuleId>, known: &[Rule]) {
        self.selected = ids
            .into_iter()
            .filter(|id| known.iter().any(|rule| &rule.id == id))
            .collect();
    }

    /// Prune selections that are no longer part of the visible subset.
    ///
    /// Policy: re-filtering discards selections that scrolled out of view,
    /// so a batch action can only ever target rows the user can see.
    pub fn retain_visible(&mut self, visible: &[Rule]) {
        self.selected
            .retain(|id| visible.iter().any(|rule| &rule.id == id));
    }

    pub fn contains(&self, id: &RuleId) -> bool {
        self.selected.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &RuleId> {
        self.selected.iter()
    }

    pub fn to_vec(&self) -> Vec<RuleId> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
