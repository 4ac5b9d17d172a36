//! The contract handed to the rendering surface.
//!
//! The grid itself is an external collaborator responsible purely for
//! layout; it receives rows, column specs and the paging contract and owns
//! none of the filtering, selection or load logic.

use crate::pagination::{PAGE_SIZE_OPTIONS, PageSize};
use crate::presentation::RuleRow;

/// Declarative description of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub header: &'static str,
    pub min_width: u16,
    pub sortable: bool,
}

/// Columns of the rule grid, as the detail views render them.
pub fn rule_columns() -> [ColumnSpec; 4] {
    [
        ColumnSpec {
            field: "title",
            header: "Título",
            min_width: 200,
            sortable: true,
        },
        ColumnSpec {
            field: "date",
            header: "Data",
            min_width: 150,
            sortable: true,
        },
        ColumnSpec {
            field: "author",
            header: "Autor",
            min_width: 250,
            sortable: false,
        },
        ColumnSpec {
            field: "status",
            header: "Status",
            min_width: 230,
            sortable: false,
        },
    ]
}

/// Columns of the rule-sheet overview list.
pub fn sheet_columns() -> [ColumnSpec; 4] {
    [
        ColumnSpec {
            field: "name",
            header: "Nome da Folha",
            min_width: 300,
            sortable: true,
        },
        ColumnSpec {
            field: "responsible",
            header: "Responsável",
            min_width: 200,
            sortable: true,
        },
        ColumnSpec {
            field: "code",
            header: "Código",
            min_width: 150,
            sortable: true,
        },
        ColumnSpec {
            field: "updated_at",
            header: "Última atualização",
            min_width: 220,
            sortable: true,
        },
    ]
}

/// Everything the rendering surface needs to draw the rule grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    pub columns: [ColumnSpec; 4],
    pub rows: Vec<RuleRow>,
    pub page_size: PageSize,
    pub page_size_options: [PageSize; 5],
    pub checkbox_selection: bool,
}

impl GridProps {
    pub fn new(rows: Vec<RuleRow>, page_size: PageSize, checkbox_selection: bool) -> Self {
        Self {
            columns: rule_columns(),
            rows,
            page_size,
            page_size_options: PAGE_SIZE_OPTIONS,
            checkbox_selection,
        }
    }
}
