//! Key-based row pairing
//!
//! Groups each table's rows by their stringified key projection and pairs the
//! groups as a full outer join. A key duplicated within a side keeps every
//! row in its group: matched groups expand as the cross product of their
//! members, the standard outer-join behavior for non-unique keys. Manual key
//! selection can trigger this; it is reported as-is, never deduplicated.

use indexmap::IndexMap;

use crate::model::{key, KeySet, Row, Table};

/// One key's placement across the two tables
pub enum KeyPairing<'a> {
    Both {
        key: Vec<String>,
        base: Vec<&'a Row>,
        compare: Vec<&'a Row>,
    },
    BaseOnly {
        key: Vec<String>,
    },
    CompareOnly {
        key: Vec<String>,
    },
}

/// Full outer join of the two tables' key groups.
///
/// Pairings come out in base first-seen order, then compare-only keys in
/// compare first-seen order.
pub fn outer_join<'a>(
    base: &'a Table,
    compare: &'a Table,
    key_set: &KeySet,
) -> Vec<KeyPairing<'a>> {
    let base_groups = group_by_key(base, key_set);
    let compare_groups = group_by_key(compare, key_set);

    let mut pairings = Vec::with_capacity(base_groups.len() + compare_groups.len());

    for (key, base_rows) in &base_groups {
        match compare_groups.get(key) {
            Some(compare_rows) => pairings.push(KeyPairing::Both {
                key: key.clone(),
                base: base_rows.clone(),
                compare: compare_rows.clone(),
            }),
            None => pairings.push(KeyPairing::BaseOnly { key: key.clone() }),
        }
    }

    for (key, _) in &compare_groups {
        if !base_groups.contains_key(key) {
            pairings.push(KeyPairing::CompareOnly { key: key.clone() });
        }
    }

    pairings
}

fn group_by_key<'a>(table: &'a Table, key_set: &KeySet) -> IndexMap<Vec<String>, Vec<&'a Row>> {
    let indices = key_set.indices_in(table);
    let mut groups: IndexMap<Vec<String>, Vec<&Row>> = IndexMap::new();
    for row in &table.rows {
        groups
            .entry(key::project(row, &indices))
            .or_default()
            .push(row);
    }
    groups
}
