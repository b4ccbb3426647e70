use crate::core::{InputTable, TableShape, TokenFormatters};

/// Builds one label per row for label-driven modes (pie, bar, line).
///
/// Text columns win over time columns; with neither, rows are named
/// `slice {index}`.
#[must_use]
pub fn marshal_labels(
    table: &InputTable,
    shape: TableShape,
    formatters: &TokenFormatters,
) -> Vec<String> {
    if shape.has_text() {
        return table
            .text_rows
            .iter()
            .map(|row| formatters.label(&row[0]))
            .collect();
    }

    if shape.has_times() {
        return table
            .time_rows
            .iter()
            .map(|row| formatters.timestamp(row[0]))
            .collect();
    }

    (0..shape.rows).map(|i| format!("slice {i}")).collect()
}
