//! Raw sheet cleaning: turns an untyped grid of cells into a Table.
//!
//! Shared by the format adapters so every input goes through the same
//! pipeline: locate the header inside a bounded preview window, repair
//! placeholder column names, apply the row cap, align row widths to the
//! header, and infer per-column types.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::error::CompareError;
use crate::model::{CellType, CellValue, Column, Table};

use super::columns::{default_placeholder, normalize_columns};
use super::header::locate_header;

/// Build a Table from raw rows as they appear in the sheet, top included.
pub fn build_table(raw_rows: Vec<Vec<CellValue>>, config: &Config, path: &Path) -> Result<Table> {
    let preview_len = raw_rows.len().min(config.preview_rows);
    let header_idx = locate_header(&raw_rows[..preview_len], config.min_named_cells)
        .ok_or_else(|| CompareError::HeaderNotFound(path.to_path_buf()))?;

    let raw_names: Vec<String> = raw_rows[header_idx]
        .iter()
        .map(|cell| match cell {
            CellValue::Null => String::new(),
            CellValue::String(s) => s.trim().to_string(),
            other => other.display().into_owned(),
        })
        .collect();
    let names = normalize_columns(&raw_names, default_placeholder);

    let columns: Vec<Column> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Column::new(name, i))
        .collect();
    let mut table = Table::new(columns);
    let col_count = table.column_count();

    let data_rows = raw_rows
        .into_iter()
        .enumerate()
        .skip(header_idx + 1)
        .take(config.max_rows.unwrap_or(usize::MAX));

    for (raw_idx, row) in data_rows {
        let mut cells: Vec<CellValue> = row.into_iter().take(col_count).collect();
        if cells.len() < col_count {
            cells.resize(col_count, CellValue::Null);
        }
        // 1-indexed position in the source sheet
        table.add_row(cells, raw_idx + 1);
    }

    infer_column_types(&mut table);
    Ok(table)
}

/// Infer column types by widening over every cell in the column.
pub fn infer_column_types(table: &mut Table) {
    for col_idx in 0..table.column_count() {
        let mut inferred = CellType::Null;

        for row in &table.rows {
            if let Some(cell) = row.cells.get(col_idx) {
                inferred = inferred.widen(cell.cell_type());
            }
        }

        if let Some(col) = table.columns.get_mut(col_idx) {
            col.inferred_type = inferred;
        }
    }
}
