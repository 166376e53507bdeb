//! Debug preview of a loaded table
//!
//! Printed right after loading when the debug flag is set: column names,
//! per-column inferred types, and the first three rows. Diagnostics only;
//! the comparison never reads this output.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::model::Table;

const PREVIEW_ROW_LIMIT: usize = 3;

pub fn render_table_preview<W: Write>(table: &Table, path: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "\n--- DEBUG: Loaded columns from {} ---", path.display())?;
    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    writeln!(writer, "{:?}", names)?;

    writeln!(writer, "\n--- DEBUG: Column types ---")?;
    for col in &table.columns {
        writeln!(writer, "{}: {}", col.name, col.inferred_type)?;
    }

    writeln!(writer, "\n--- DEBUG: First {} rows ---", PREVIEW_ROW_LIMIT)?;
    let mut grid: Vec<Vec<String>> = Vec::new();
    grid.push(table.columns.iter().map(|c| c.name.clone()).collect());
    for row in table.rows.iter().take(PREVIEW_ROW_LIMIT) {
        grid.push(row.cells.iter().map(|c| c.display().into_owned()).collect());
    }
    write!(writer, "{}", build_table(&grid))?;

    Ok(())
}

/// Build a box-drawn table from string rows (first row is the header)
fn build_table(data: &[Vec<String>]) -> String {
    if data.is_empty() || data[0].is_empty() {
        return String::new();
    }

    let col_count = data[0].len();

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.len());
            }
        }
    }

    let mut output = String::new();

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            line.push(if i < col_widths.len() - 1 { mid } else { right });
        }
        line.push('\n');
        line
    };

    let render_row = |row: &[String]| {
        let mut line = String::from('│');
        for (i, cell) in row.iter().enumerate() {
            let width = col_widths.get(i).copied().unwrap_or(0);
            line.push_str(&format!(" {:width$} │", cell, width = width));
        }
        line.push('\n');
        line
    };

    output.push_str(&border('┌', '┬', '┐'));
    if let Some(header) = data.first() {
        output.push_str(&render_row(header));
    }
    output.push_str(&border('├', '┼', '┤'));
    for row in data.iter().skip(1) {
        output.push_str(&render_row(row));
    }
    output.push_str(&border('└', '┴', '┘'));

    output
}
