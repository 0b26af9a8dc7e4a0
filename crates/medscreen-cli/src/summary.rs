//! Run summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Report: {}", summary.report_path.display());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    table.add_row(vec![Cell::new("Results validated"), count_cell(summary.results_in)]);
    table.add_row(vec![Cell::new("Outliers flagged"), count_cell(summary.outliers)]);
    table.add_row(vec![
        Cell::new("Patients retained"),
        count_cell(summary.patients_retained),
    ]);
    table.add_row(vec![
        Cell::new("Report rows").add_attribute(Attribute::Bold),
        count_cell(summary.report_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
