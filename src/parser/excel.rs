//! Excel file adapter (xlsx, xls, ods)

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::config::Config;
use crate::error::CompareError;
use crate::model::{CellValue, Table};

use super::{sheet, SheetParser};

/// Sheets whose name contains this marker are technical artifacts of the
/// exporting tool and are skipped during auto-selection.
const HIDDEN_SHEET_MARKER: &str = "hiddensheet";

/// Parser for Excel workbooks
pub struct ExcelParser;

impl SheetParser for ExcelParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        let sheet_name = if let Some(ref name) = config.sheet_name {
            name.clone()
        } else {
            workbook
                .sheet_names()
                .iter()
                .find(|s| !s.to_lowercase().contains(HIDDEN_SHEET_MARKER))
                .cloned()
                .ok_or_else(|| CompareError::NoUsableSheet(path.to_path_buf()))?
        };

        let range: Range<Data> = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        let raw_rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        sheet::build_table(raw_rows, config, path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "xlsx" | "xls" | "ods" | "xlsm")
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::String(Cow::Owned(s.clone()))
            }
        }
        Data::Float(f) => {
            // Check if it's actually an integer
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(ref dt) => {
            // calamine ExcelDateTime - use Display to convert and parse
            let s = format!("{}", dt);
            if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f")
            {
                CellValue::DateTime(datetime)
            } else if let Ok(datetime) =
                chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            {
                CellValue::DateTime(datetime)
            } else if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                CellValue::Date(date)
            } else {
                CellValue::String(Cow::Owned(s))
            }
        }
        Data::DateTimeIso(s) => {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                CellValue::DateTime(dt)
            } else if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                CellValue::Date(d)
            } else {
                CellValue::String(Cow::Owned(s.clone()))
            }
        }
        Data::DurationIso(s) => CellValue::String(Cow::Owned(s.clone())),
        Data::Error(e) => CellValue::String(Cow::Owned(format!("#{:?}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_become_ints() {
        assert_eq!(convert_cell(&Data::Float(3.0)), CellValue::Int(3));
        assert_eq!(convert_cell(&Data::Float(3.25)), CellValue::Float(3.25));
    }

    #[test]
    fn blank_strings_are_missing() {
        assert!(convert_cell(&Data::String("   ".into())).is_null());
        assert!(convert_cell(&Data::Empty).is_null());
    }
}
