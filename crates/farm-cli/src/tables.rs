//! Terminal table rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use farm_model::Customer;
use farm_output::LabelRow;
use farm_report::CustomerTotal;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn customer_table(customers: &[Customer]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Name"),
        header_cell("Phone"),
        header_cell("Address"),
        header_cell("Qty"),
        header_cell("Memo"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for customer in customers {
        table.add_row(vec![
            Cell::new(if customer.ordered { "●" } else { "" }),
            Cell::new(&customer.name),
            Cell::new(&customer.phone),
            Cell::new(&customer.address),
            Cell::new(customer.qty),
            Cell::new(&customer.memo),
        ]);
    }
    table
}

pub fn stats_table(totals: &[CustomerTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Phone"),
        header_cell("Total boxes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (rank, total) in totals.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&total.name),
            Cell::new(&total.phone),
            Cell::new(total.total_qty),
        ]);
    }
    table
}

pub fn label_group_table(rows: &[&LabelRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("받는분"),
        header_cell("연락처"),
        header_cell("주소"),
        header_cell("수량"),
        header_cell("메모"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.phone),
            Cell::new(&row.address),
            Cell::new(row.qty),
            Cell::new(&row.memo),
        ]);
    }
    table
}
