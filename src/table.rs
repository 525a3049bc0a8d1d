//! ASCII grid rendering through resolved column configurations.
//!
//! The preview command renders rows the way the grid would show them:
//! hidden columns are dropped, headers use the resolved `header_name`, and
//! each cell goes through the column's value formatter before falling back
//! to the raw display form.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::{config::ColumnConfig, rows::RowRecord};

pub fn render_grid(configs: &[ColumnConfig], rows: &[RowRecord]) -> String {
    let visible: Vec<&ColumnConfig> = configs.iter().filter(|c| !c.hidden).collect();
    let headers: Vec<String> = visible.iter().map(|c| c.header_name.clone()).collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|record| {
            visible
                .iter()
                .map(|config| match record.get(&config.field) {
                    Some(value) => config
                        .formatter
                        .apply(value)
                        .unwrap_or_else(|| value.as_display()),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    render_table(&headers, &cells)
}

pub fn print_grid(configs: &[ColumnConfig], rows: &[RowRecord]) {
    print!("{}", render_grid(configs, rows));
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let column_count = headers.len();
    let mut widths = headers.iter().map(|h| display_width(h)).collect::<Vec<_>>();

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    for width in &mut widths {
        *width = (*width).max(1);
    }

    let mut output = String::new();

    let header_line = format_row(headers, &widths);
    let _ = writeln!(output, "{header_line}");

    let separator_widths = widths.iter().map(|w| (*w).max(3)).collect::<Vec<usize>>();
    let separator_cells = separator_widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>();
    let separator_line = format_row(&separator_cells, &separator_widths);
    let _ = writeln!(output, "{separator_line}");

    for row in rows {
        let row_line = format_row(row, &widths);
        let _ = writeln!(output, "{row_line}");
    }

    output
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let mut cells = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        if idx >= widths.len() {
            break;
        }
        let sanitized = sanitize_cell(value);
        let display = display_width(sanitized.as_ref());
        let mut cell = sanitized.into_owned();
        let padding = widths
            .get(idx)
            .copied()
            .unwrap_or_default()
            .saturating_sub(display);
        if padding > 0 {
            cell.push_str(&" ".repeat(padding));
        }
        cells.push(cell);
    }
    let mut line = cells.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        let mut sanitized = String::with_capacity(value.len());
        for ch in value.chars() {
            match ch {
                '\n' | '\r' | '\t' => sanitized.push(' '),
                other => sanitized.push(other),
            }
        }
        Cow::Owned(sanitized)
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ColumnConfig,
        data::RawValue,
        format::ValueFormatter,
        rows::RowRecord,
        schema::{ColumnSchema, SemanticType},
    };

    fn config(name: &str) -> ColumnConfig {
        ColumnConfig::base(&ColumnSchema {
            name: name.to_string(),
            semantic_type: SemanticType::Number,
        })
    }

    #[test]
    fn hidden_columns_are_dropped_and_formatters_applied() {
        let mut difficulty = config("Difficulty");
        difficulty.formatter = ValueFormatter::PercentTwoDecimals;
        let mut secret = config("secret");
        secret.hidden = true;

        let mut record = RowRecord::new();
        record.insert("Difficulty".to_string(), RawValue::Number(0.5));
        record.insert("secret".to_string(), RawValue::Number(7.0));

        let rendered = render_grid(&[difficulty, secret], &[record]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Difficulty");
        assert_eq!(lines[2], "50.00%");
        assert!(!rendered.contains('7'));
    }

    #[test]
    fn missing_record_keys_render_empty() {
        let rendered = render_grid(&[config("a"), config("b")], &[RowRecord::new()]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
    }
}
