//! Plain text rendering of a [`RenderedTable`]

use std::fmt::Write as _;

use trainhub_shared::table::{RenderedTable, SortDirection, TableBody};

const COLUMN_GAP: &str = "  ";

fn indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "",
        Some(SortDirection::Ascending) => " ^",
        Some(SortDirection::Descending) => " v",
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width_wanted: usize) -> String {
    let mut result = s.to_string();
    result.extend(std::iter::repeat(' ').take(width_wanted.saturating_sub(width(s))));
    result
}

pub fn table_to_text(table: &RenderedTable) -> String {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| format!("{}{}", h.label, indicator(h.direction)))
        .collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    if let TableBody::Rows(rows) = &table.body {
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = (*w).max(width(cell));
            }
        }
    }

    let mut result = String::new();
    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };
    let _ = writeln!(result, "{}", format_line(&headers));
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let _ = writeln!(result, "{}", "-".repeat(rule_width));
    match &table.body {
        TableBody::Rows(rows) => {
            for row in rows {
                let _ = writeln!(result, "{}", format_line(&row.cells));
            }
        }
        TableBody::Empty { message, .. } => {
            let _ = writeln!(result, "{message}");
        }
    }
    result
}
