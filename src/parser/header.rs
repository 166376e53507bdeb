//! Header-row location
//!
//! Reporting tools place banner and title rows above the real column header.
//! The real header is the first row with many distinct text labels, so the
//! scan returns the earliest row that clears the text-cell threshold.

use crate::model::CellValue;

/// Locate the most likely header row within a preview window of raw rows.
///
/// A row qualifies when at least `min_named` of its cells are non-empty
/// trimmed text. Numeric cells never count, so all-numeric sheets (and empty
/// ones) yield None and the caller must fail rather than mis-parse.
pub fn locate_header(rows: &[Vec<CellValue>], min_named: usize) -> Option<usize> {
    rows.iter().position(|row| {
        let text_count = row
            .iter()
            .filter(|cell| match cell {
                CellValue::String(s) => !s.trim().is_empty(),
                _ => false,
            })
            .count();
        text_count >= min_named
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn skips_banner_rows() {
        let rows = vec![
            vec![text("Report Title")],
            vec![text(""), text(""), text("")],
            vec![text("ID"), text("Name"), text("Amount")],
            vec![text("1"), text("A"), text("10")],
        ];
        assert_eq!(locate_header(&rows, 3), Some(2));
    }

    #[test]
    fn empty_sheet_has_no_header() {
        assert_eq!(locate_header(&[], 3), None);
    }

    #[test]
    fn numeric_rows_are_never_headers() {
        let rows = vec![
            vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)],
            vec![CellValue::Float(1.5), CellValue::Float(2.5), CellValue::Float(3.5)],
        ];
        assert_eq!(locate_header(&rows, 3), None);
    }

    #[test]
    fn first_qualifying_row_wins() {
        let rows = vec![
            vec![text("a"), text("b"), text("c")],
            vec![text("d"), text("e"), text("f")],
        ];
        assert_eq!(locate_header(&rows, 3), Some(0));
    }

    #[test]
    fn whitespace_cells_do_not_count() {
        let rows = vec![vec![text("  "), text("x"), text("y")]];
        assert_eq!(locate_header(&rows, 3), None);
        assert_eq!(locate_header(&rows, 2), Some(0));
    }
}
