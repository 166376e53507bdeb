//! Report assembly: flattens a reconciliation into printable strings

mod console;
mod excel;
mod preview;

use crate::reconcile::{ChangedRow, Reconciliation};

pub use console::render_console;
pub use excel::export_excel;
pub use preview::render_table_preview;

/// Separator between key parts and between rendered differences
const SEPARATOR: &str = " | ";

/// One changed key with its pipe-joined differences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub key: String,
    pub differences: String,
}

/// Console- and export-ready view of a reconciliation
#[derive(Debug, Default)]
pub struct Report {
    pub differences: Vec<ReportRow>,
    pub only_in_base: Vec<String>,
    pub only_in_compare: Vec<String>,
}

impl Report {
    pub fn assemble(reconciliation: &Reconciliation) -> Self {
        Self {
            differences: reconciliation.changed.iter().map(render_changed).collect(),
            only_in_base: reconciliation
                .base_only
                .iter()
                .map(|key| key.join(SEPARATOR))
                .collect(),
            only_in_compare: reconciliation
                .compare_only
                .iter()
                .map(|key| key.join(SEPARATOR))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
            && self.only_in_base.is_empty()
            && self.only_in_compare.is_empty()
    }
}

fn render_changed(changed: &ChangedRow) -> ReportRow {
    let differences = changed
        .fields
        .iter()
        .map(|f| format!("{}: {} / {}", f.column, f.base.display(), f.compare.display()))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    ReportRow {
        key: changed.key.join(SEPARATOR),
        differences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use crate::reconcile::FieldDiff;

    #[test]
    fn joins_key_parts_and_differences() {
        let reconciliation = Reconciliation {
            changed: vec![ChangedRow {
                key: vec!["4711".to_string(), "DE".to_string()],
                fields: vec![
                    FieldDiff {
                        column: "amt".to_string(),
                        base: CellValue::Int(10),
                        compare: CellValue::Int(20),
                    },
                    FieldDiff {
                        column: "state".to_string(),
                        base: CellValue::from("open"),
                        compare: CellValue::from("closed"),
                    },
                ],
            }],
            base_only: vec![vec!["1".to_string(), "FR".to_string()]],
            compare_only: vec![],
            ..Reconciliation::default()
        };

        let report = Report::assemble(&reconciliation);
        assert_eq!(report.differences[0].key, "4711 | DE");
        assert_eq!(
            report.differences[0].differences,
            "amt: 10 / 20 | state: open / closed"
        );
        assert_eq!(report.only_in_base, vec!["1 | FR".to_string()]);
        assert!(report.only_in_compare.is_empty());
        assert!(!report.is_empty());
    }

    #[test]
    fn empty_reconciliation_gives_empty_report() {
        let report = Report::assemble(&Reconciliation::default());
        assert!(report.is_empty());
    }
}
