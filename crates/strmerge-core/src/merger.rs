//! Merge engine for reconciling an old and a freshly extracted table
//!
//! NEW is authoritative for the key set, entry order, and comments; OLD is
//! authoritative for translated values. Keys present only in OLD are stale
//! translations and are dropped.

use crate::table::{Entry, StringsTable};

/// Merge two tables into a fresh one. Pure: neither input is mutated.
///
/// For each entry of `new`, in order: if its key exists in `old`, the merged
/// entry keeps OLD's value and raw translation line but adopts NEW's
/// comments; otherwise NEW's entry carries over unchanged.
pub fn merge(old: &StringsTable, new: &StringsTable) -> StringsTable {
    let mut merged = StringsTable::new();

    for entry in new.entries() {
        let resolved = match old.get(&entry.key) {
            Some(prev) => Entry {
                comments: entry.comments.clone(),
                ..prev.clone()
            },
            None => entry.clone(),
        };
        merged.insert(resolved);
    }

    merged
}
