use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use conll_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Sentences"),
        header_cell("Tokens"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in &result.documents {
        let output = summary
            .output
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.display().to_string());
        table.add_row(vec![
            Cell::new(&summary.document),
            Cell::new(summary.sentences),
            Cell::new(summary.tokens),
            Cell::new(output),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_sentences()).add_attribute(Attribute::Bold),
        Cell::new(result.total_tokens()).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");

    if result.has_errors() {
        eprintln!("Errors ({}):", result.errors.len());
        for error in &result.errors {
            eprintln!("  - {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
