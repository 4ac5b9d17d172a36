//! The rule-sheet overview list.
//!
//! Far simpler than the detail view: a fixed ten-row page, no filtering,
//! and row activation navigates straight into the sheet.

use featws_model::{SheetId, SheetSummary};

use crate::nav::NavigationIntent;
use crate::presentation::format_date;

/// Presentation row of the overview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub id: String,
    pub name: String,
    pub responsible: String,
    pub code: String,
    pub updated_at: String,
}

/// State of the overview list view.
#[derive(Debug, Clone, Default)]
pub struct SheetList {
    sheets: Vec<SheetSummary>,
}

impl SheetList {
    /// Rows per page of the overview grid (not user adjustable).
    pub const PAGE_SIZE: usize = 10;

    pub fn new(sheets: Vec<SheetSummary>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[SheetSummary] {
        &self.sheets
    }

    pub fn rows(&self) -> Vec<SheetRow> {
        self.sheets
            .iter()
            .map(|sheet| SheetRow {
                id: sheet.id.as_str().to_string(),
                name: sheet.name.clone(),
                responsible: sheet.responsible.clone(),
                code: sheet.code.clone(),
                updated_at: format_date(&sheet.updated_at),
            })
            .collect()
    }

    /// Clicking a row opens the sheet.
    pub fn row_activated(&self, id: &SheetId) -> Option<NavigationIntent> {
        self.sheets
            .iter()
            .find(|sheet| &sheet.id == id)
            .map(|sheet| NavigationIntent::SheetDetail(sheet.id.clone()))
    }

    /// The admin-only "new sheet" action.
    pub fn create_requested(&self) -> NavigationIntent {
        NavigationIntent::CreateSheet
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use featws_model::SheetSummary;

    use super::*;

    fn make_summary(id: &str, name: &str) -> SheetSummary {
        SheetSummary {
            id: SheetId::new(id).expect("sheet id"),
            name: name.to_string(),
            responsible: "Onboarding BB".to_string(),
            code: "12345678".to_string(),
            updated_at: Utc.with_ymd_and_hms(2022, 1, 20, 10, 55, 30).unwrap(),
        }
    }

    #[test]
    fn rows_format_dates_at_the_presentation_boundary() {
        let list = SheetList::new(vec![make_summary("1", "Internet APF")]);
        let rows = list.rows();
        assert_eq!(rows[0].updated_at, "20/01/2022");
        assert_eq!(rows[0].name, "Internet APF");
    }

    #[test]
    fn row_activation_navigates_only_to_known_sheets() {
        let list = SheetList::new(vec![make_summary("1", "Internet APF")]);
        let known = SheetId::new("1").unwrap();
        let unknown = SheetId::new("42").unwrap();
        assert_eq!(
            list.row_activated(&known),
            Some(NavigationIntent::SheetDetail(known))
        );
        assert_eq!(list.row_activated(&unknown), None);
    }
}
