//! Key selection: discovery of a minimal unique key and validation of
//! user-supplied key columns.

use rustc_hash::FxHashSet;

use super::schema::CellType;
use super::table::{Row, Table};

/// An ordered, non-empty set of column names forming a composite row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    columns: Vec<String>,
}

impl KeySet {
    /// Build a key set from column names. Returns None when empty.
    pub fn new(columns: Vec<String>) -> Option<Self> {
        if columns.is_empty() {
            None
        } else {
            Some(Self { columns })
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolve the key columns to indices in the given table, in key order.
    /// Missing columns are skipped; callers validate presence beforehand.
    pub fn indices_in(&self, table: &Table) -> Vec<usize> {
        self.columns
            .iter()
            .filter_map(|name| table.column_index(name))
            .collect()
    }
}

impl std::fmt::Display for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.columns.join(", "))
    }
}

/// Project a row onto the given column indices as display strings.
pub fn project(row: &Row, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| row.get(i))
        .map(|c| c.display().into_owned())
        .collect()
}

/// Key columns absent from the table, in the order they were given.
pub fn missing_key_columns(table: &Table, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .cloned()
        .collect()
}

/// Find the smallest column or column combination whose stringified values
/// uniquely identify every row.
///
/// Candidates exclude columns that are entirely missing and columns whose
/// inferred type is float: fractional numeric columns are computed metrics,
/// not identifiers. Search order is singletons in table order, then
/// combinations of ascending size in lexicographic order over the candidate
/// list, so the result is reproducible for a given column ordering.
pub fn find_unique_key(table: &Table, max_columns: usize) -> Option<KeySet> {
    let candidates: Vec<usize> = (0..table.column_count())
        .filter(|&idx| {
            table.columns[idx].inferred_type != CellType::Float
                && table.rows.iter().any(|row| {
                    row.get(idx).map(|c| !c.is_null()).unwrap_or(false)
                })
        })
        .collect();

    for &idx in &candidates {
        if all_distinct(table, &[idx]) {
            return keyset_from_indices(table, &[idx]);
        }
    }

    for size in 2..=max_columns {
        for combo in index_combinations(candidates.len(), size) {
            let indices: Vec<usize> = combo.iter().map(|&i| candidates[i]).collect();
            if all_distinct(table, &indices) {
                return keyset_from_indices(table, &indices);
            }
        }
    }

    None
}

fn keyset_from_indices(table: &Table, indices: &[usize]) -> Option<KeySet> {
    KeySet::new(
        indices
            .iter()
            .map(|&i| table.columns[i].name.clone())
            .collect(),
    )
}

fn all_distinct(table: &Table, indices: &[usize]) -> bool {
    let mut seen: FxHashSet<Vec<String>> = FxHashSet::default();
    for row in &table.rows {
        if !seen.insert(project(row, indices)) {
            return false;
        }
    }
    true
}

/// All size-r index combinations of 0..n in lexicographic order.
fn index_combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if r == 0 || r > n {
        return out;
    }
    let mut combo: Vec<usize> = (0..r).collect();
    loop {
        out.push(combo.clone());
        // Advance the rightmost index that can still move
        let mut i = r;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if combo[i] != i + n - r {
                break;
            }
        }
        combo[i] += 1;
        for j in i + 1..r {
            combo[j] = combo[j - 1] + 1;
        }
    }
}
