use crate::report::Reportable;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Table};

/// Render rows as a UTF-8 box table with a bold header
pub fn render_table<R: Reportable>(rows: &[R]) -> String {
    if rows.is_empty() {
        return format!("No {} found\n", R::NOUN);
    }

    let mut table = Table::new();
    // Default arrangement: cells are never wrapped
    table.load_preset(UTF8_FULL);

    table.set_header(
        R::headers()
            .iter()
            .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
    );

    for row in rows {
        table.add_row(row.cells());
    }

    format!("{}\n", table)
}

/// Summary of all rows, noting when only the first `shown` were printed
pub fn summary_line<R: Reportable>(rows: &[R], shown: usize) -> String {
    let summary = R::summarize(rows);
    if shown < rows.len() {
        format!("{} (showing first {})\n", summary, shown)
    } else {
        format!("{}\n", summary)
    }
}
