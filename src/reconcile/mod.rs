//! Row reconciliation: full-outer-join comparison of two tables on a key

mod matcher;

use serde::{Deserialize, Serialize};

use crate::model::{CellValue, KeySet, Row, Table};

pub use matcher::{outer_join, KeyPairing};

/// A single differing column within a matched row pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDiff {
    pub column: String,
    pub base: CellValue,
    pub compare: CellValue,
}

/// A matched row pair with at least one differing column
#[derive(Debug, Clone)]
pub struct ChangedRow {
    /// Key parts in key-column order
    pub key: Vec<String>,
    pub fields: Vec<FieldDiff>,
}

/// Statistics about the reconciliation
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub base_rows: usize,
    pub compare_rows: usize,
    pub matched_pairs: usize,
    pub identical: usize,
    pub changed: usize,
    pub base_only: usize,
    pub compare_only: usize,
}

/// Result of reconciling two tables. Built once per run, then read-only.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Matched keys with per-column differences (identical pairs are dropped)
    pub changed: Vec<ChangedRow>,
    /// Keys present only in the base table, first-seen order
    pub base_only: Vec<Vec<String>>,
    /// Keys present only in the compare table, first-seen order
    pub compare_only: Vec<Vec<String>>,
    pub stats: ReconcileStats,
}

impl Reconciliation {
    /// Check if there are any differences
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty() || !self.base_only.is_empty() || !self.compare_only.is_empty()
    }
}

/// Compare two tables keyed on `key_set`.
///
/// Preconditions (enforced by the caller): every key column exists in both
/// tables, and key columns were coerced to text so representation differences
/// cannot break the match. Every non-key column present in both tables is
/// compared in base column order; a column missing on both sides of a pair is
/// equal by definition. Duplicate key groups expand as cross products, one
/// changed entry per differing pair.
pub fn reconcile(base: &Table, compare: &Table, key_set: &KeySet) -> Reconciliation {
    let mut result = Reconciliation {
        stats: ReconcileStats {
            base_rows: base.row_count(),
            compare_rows: compare.row_count(),
            ..ReconcileStats::default()
        },
        ..Reconciliation::default()
    };

    let shared = shared_columns(base, compare, key_set);

    for pairing in outer_join(base, compare, key_set) {
        match pairing {
            KeyPairing::Both {
                key,
                base: base_rows,
                compare: compare_rows,
            } => {
                for base_row in &base_rows {
                    for compare_row in &compare_rows {
                        result.stats.matched_pairs += 1;
                        let fields = diff_fields(base_row, compare_row, &shared);
                        if fields.is_empty() {
                            result.stats.identical += 1;
                        } else {
                            result.stats.changed += 1;
                            result.changed.push(ChangedRow {
                                key: key.clone(),
                                fields,
                            });
                        }
                    }
                }
            }
            KeyPairing::BaseOnly { key } => {
                result.stats.base_only += 1;
                result.base_only.push(key);
            }
            KeyPairing::CompareOnly { key } => {
                result.stats.compare_only += 1;
                result.compare_only.push(key);
            }
        }
    }

    result
}

struct SharedColumn {
    name: String,
    base_index: usize,
    compare_index: usize,
}

/// Non-key columns present in both tables, in base column order.
fn shared_columns(base: &Table, compare: &Table, key_set: &KeySet) -> Vec<SharedColumn> {
    base.columns
        .iter()
        .filter(|col| !key_set.columns().contains(&col.name))
        .filter_map(|col| {
            compare.column_index(&col.name).map(|compare_index| SharedColumn {
                name: col.name.clone(),
                base_index: col.index,
                compare_index,
            })
        })
        .collect()
}

fn diff_fields(base_row: &Row, compare_row: &Row, shared: &[SharedColumn]) -> Vec<FieldDiff> {
    let mut fields = Vec::new();
    for col in shared {
        let base_value = base_row.get(col.base_index).cloned().unwrap_or(CellValue::Null);
        let compare_value = compare_row
            .get(col.compare_index)
            .cloned()
            .unwrap_or(CellValue::Null);

        // Null == Null, so simultaneously-missing cells never register
        if base_value != compare_value {
            fields.push(FieldDiff {
                column: col.name.clone(),
                base: base_value,
                compare: compare_value,
            });
        }
    }
    fields
}
