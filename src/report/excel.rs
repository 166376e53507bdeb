//! Excel export of the comparison report
//!
//! Writes three sheets: "Differences" (Key, Differences), "OnlyInBase"
//! ("Only in base"), "OnlyInCompare" ("Only in compare"). An existing file
//! at the target path is overwritten.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::Report;

pub fn export_excel(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Differences")?;
        sheet.write_string_with_format(0, 0, "Key", &header_format)?;
        sheet.write_string_with_format(0, 1, "Differences", &header_format)?;
        for (i, row) in report.differences.iter().enumerate() {
            let excel_row = (i + 1) as u32;
            sheet.write_string(excel_row, 0, &row.key)?;
            sheet.write_string(excel_row, 1, &row.differences)?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("OnlyInBase")?;
        write_key_column(sheet, "Only in base", &report.only_in_base, &header_format)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("OnlyInCompare")?;
        write_key_column(sheet, "Only in compare", &report.only_in_compare, &header_format)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(())
}

fn write_key_column(
    sheet: &mut Worksheet,
    header: &str,
    keys: &[String],
    header_format: &Format,
) -> Result<()> {
    sheet.write_string_with_format(0, 0, header, header_format)?;
    for (i, key) in keys.iter().enumerate() {
        sheet.write_string((i + 1) as u32, 0, key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportRow;

    #[test]
    fn writes_three_sheet_workbook() {
        let report = Report {
            differences: vec![ReportRow {
                key: "1".to_string(),
                differences: "amt: 10 / 20".to_string(),
            }],
            only_in_base: vec!["2".to_string()],
            only_in_compare: vec!["3".to_string()],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.xlsx");
        export_excel(&report, &path).unwrap();
        assert!(path.is_file());

        // Overwrites on a second run
        export_excel(&Report::default(), &path).unwrap();
        assert!(path.is_file());
    }
}
