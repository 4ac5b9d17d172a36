//! Table rendering for the terminal surface.
//!
//! This module is the "rendering surface" of the controller contract: it
//! receives grid props and draws them, owning nothing but layout.

use std::ops::Range;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use featws_core::detail::SheetDetail;
use featws_core::grid::GridProps;
use featws_core::list::SheetRow;
use featws_core::presentation::StatusIndicator;

pub fn print_sheets(rows: &[SheetRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Código"),
        header_cell("Nome da Folha"),
        header_cell("Responsável"),
        header_cell("Última atualização"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.code),
            Cell::new(&row.name),
            Cell::new(&row.responsible),
            Cell::new(&row.updated_at),
        ]);
    }
    println!("{table}");
    println!("{} folhas de regra", rows.len());
}

pub fn print_rules(detail: &SheetDetail, props: &GridProps, range: Range<usize>, page: usize) {
    let mut table = Table::new();
    let mut headers: Vec<Cell> = Vec::new();
    if props.checkbox_selection {
        headers.push(header_cell(""));
    }
    headers.push(header_cell("Código"));
    for column in &props.columns {
        headers.push(header_cell(column.header));
    }
    table.set_header(headers);
    apply_table_style(&mut table);

    for row in &props.rows[range.clone()] {
        let mut cells: Vec<Cell> = Vec::new();
        if props.checkbox_selection {
            cells.push(if row.selected {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                Cell::new(" ")
            });
        }
        cells.push(Cell::new(&row.id));
        cells.push(Cell::new(&row.title));
        cells.push(Cell::new(&row.date));
        cells.push(Cell::new(&row.author));
        cells.push(status_cell(&row.status, row.indicator));
        table.add_row(cells);
    }
    println!("{table}");

    let total = props.rows.len();
    let shown = range.len();
    let pages = total.div_ceil(props.page_size.as_usize()).max(1);
    println!(
        "Página {} de {pages} - exibindo {shown} de {total} regras{}",
        page + 1,
        if detail.is_filtering() {
            " (filtro ativo)"
        } else {
            ""
        }
    );
    if props.checkbox_selection {
        println!("{} regras selecionadas para deferimento", detail.selection().len());
    }
}

/// Bullet + label, colored with the indicator's theme color.
fn status_cell(label: &str, indicator: StatusIndicator) -> Cell {
    let (r, g, b) = rgb(indicator);
    Cell::new(format!("● {label}")).fg(Color::Rgb { r, g, b })
}

fn rgb(indicator: StatusIndicator) -> (u8, u8, u8) {
    let hex = indicator.hex();
    let parse = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    (parse(1..3), parse(3..5), parse(5..7))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
