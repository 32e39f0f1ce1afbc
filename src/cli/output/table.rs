use crate::error::MedusaError;

use super::analysis::{EntrySummary, TodoEntry};

const COLUMN_SEPARATOR: &str = "  ";
const TODO_TITLE: &str = " TODO ";

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Column {
    title: &'static str,
    align: Align,
    min_width: usize,
}

const STATS_COLUMNS: [Column; 6] = [
    Column {
        title: "name",
        align: Align::Left,
        min_width: 0,
    },
    Column {
        title: "current",
        align: Align::Right,
        min_width: 8,
    },
    Column {
        title: "mean",
        align: Align::Right,
        min_width: 5,
    },
    Column {
        title: "median",
        align: Align::Right,
        min_width: 7,
    },
    Column {
        title: "max",
        align: Align::Right,
        min_width: 4,
    },
    Column {
        title: "min",
        align: Align::Right,
        min_width: 4,
    },
];

fn width_of(value: &str) -> usize {
    value.chars().count()
}

fn render_row(cells: &[String], columns: &[Column], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(columns.iter().zip(widths.iter().copied()))
        .map(|(cell, (column, width))| match column.align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Returns the summaries as a table: a header, a rule as wide as the header and one row per
/// entry. The name column is as wide as the longest name; numeric columns have a fixed minimum
/// width and only grow when a value doesn't fit.
pub fn format_stats(entries: &[EntrySummary]) -> Result<Vec<String>, MedusaError> {
    if entries.is_empty() {
        return Err(MedusaError::NoData);
    }

    let rows = entries
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.current.to_string(),
                v.mean.to_string(),
                v.median.to_string(),
                v.max.to_string(),
                v.min.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let widths = STATS_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .map(|row| width_of(&row[index]))
                .chain([column.min_width, width_of(column.title)])
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let header = STATS_COLUMNS
        .iter()
        .map(|v| v.title.to_string())
        .collect::<Vec<_>>();
    let header = render_row(&header, &STATS_COLUMNS, &widths);
    let rule = "-".repeat(width_of(&header));

    let mut lines = vec![header, rule];
    lines.extend(
        rows.iter()
            .map(|row| render_row(row, &STATS_COLUMNS, &widths)),
    );
    Ok(lines)
}

fn format_todo_entry(rank: usize, entry: &TodoEntry) -> String {
    let marker = if rank == 1 { ">> " } else { "   " };
    let suffix = entry
        .total_parts
        .as_ref()
        .map(|v| format!("/{v}"))
        .unwrap_or_default();
    format!(
        "{marker}{rank}. (+{}) {} (upd. {}{suffix})",
        entry.current, entry.name, entry.next_update
    )
}

/// Returns a banner followed by a numbered list of entries in the given order. With no entries
/// only the banner is returned.
pub fn format_todo(entries: &[TodoEntry]) -> Vec<String> {
    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format_todo_entry(index + 1, entry))
        .collect::<Vec<_>>();

    let padding = lines
        .iter()
        .map(|v| width_of(v))
        .max()
        .unwrap_or_default()
        .saturating_sub(width_of(TODO_TITLE));
    let banner = format!(
        "{}{TODO_TITLE}{}",
        "=".repeat(padding / 2),
        "=".repeat(padding.div_ceil(2))
    );

    let mut result = vec![banner];
    result.extend(lines);
    result
}
