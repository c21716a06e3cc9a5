//! Positional table inference over clustered lines.
//!
//! Treats the first line as the header row unconditionally and every later
//! line as a data row, padding ragged lines out to the widest line first.
//! No tabularity detection is performed; non-tabular input degrades to a
//! best-effort grid and the caller decides whether to trust it or fall back
//! to flattened text.
use indexmap::IndexMap;

use crate::types::{Line, Table};
use crate::utils::MIN_COLUMN_WIDTH;

/// Reconstruct a rectangular table from reading-order lines.
///
/// Every line shorter than the widest line is right-padded with empty
/// strings, so each row maps the full header set. Lines are never truncated.
/// Empty input yields an empty table; this function never fails.
///
/// A duplicated header keeps its first column position and the last token
/// under it wins, the same collapse a positional zip into a map produces.
pub fn reconstruct_table(lines: &[Line]) -> Table {
    let max_cols = lines.iter().map(Line::len).max().unwrap_or(0);

    let padded: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            let mut tokens = line.tokens.clone();
            tokens.resize(max_cols, String::new());
            tokens
        })
        .collect();

    let mut padded = padded.into_iter();
    let headers: Vec<String> = padded.next().unwrap_or_default();

    let mut rows: Vec<IndexMap<String, String>> = Vec::new();
    for tokens in padded {
        // Mismatched rows are dropped rather than stored; after padding this
        // only fires when the header row itself is empty.
        if tokens.len() != headers.len() {
            continue;
        }
        let mut row = IndexMap::with_capacity(headers.len());
        for (header, cell) in headers.iter().zip(tokens) {
            row.insert(header.clone(), cell);
        }
        rows.push(row);
    }

    tracing::debug!(
        lines = lines.len(),
        columns = headers.len(),
        rows = rows.len(),
        "reconstructed table from lines"
    );

    Table { headers, rows }
}

/// Render a table as a GitHub-style pipe table.
///
/// Columns are padded to the widest cell, with a floor of
/// [`MIN_COLUMN_WIDTH`]. An empty table renders as an empty string.
pub fn table_to_markdown(table: &Table) -> String {
    if table.headers.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = table
        .headers
        .iter()
        .map(|header| {
            let cell_width = table
                .rows
                .iter()
                .map(|row| row.get(header).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0);
            header.chars().count().max(cell_width).max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let mut out = String::new();
    render_row(&mut out, table.headers.iter().map(String::as_str), &widths);

    out.push('|');
    for width in &widths {
        out.push(' ');
        out.extend(std::iter::repeat('-').take(*width));
        out.push_str(" |");
    }
    out.push('\n');

    for row in &table.rows {
        render_row(
            &mut out,
            table
                .headers
                .iter()
                .map(|header| row.get(header).map_or("", String::as_str)),
            &widths,
        );
    }

    out
}

fn render_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(" |");
    }
    out.push('\n');
}
