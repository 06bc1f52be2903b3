//! Core types for representing a .strings localization table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One translation pair plus the comment block that precedes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Raw comment lines preceding the translation, without trailing newlines.
    /// May include blank lines captured inside an open block comment.
    pub comments: Vec<String>,
    /// Key extracted from the translation line
    pub key: String,
    /// Translated text extracted from the translation line
    pub value: String,
    /// The literal `"key" = "value";` line, kept verbatim so serialization
    /// reproduces quoting and escaping exactly
    pub raw_line: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        comments: Vec<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            comments,
            key: key.into(),
            value: value.into(),
            raw_line: raw_line.into(),
        }
    }
}

/// An ordered strings table with a derived key lookup.
///
/// The entry sequence and the index are owned together and only updated
/// through [`StringsTable::insert`], so they can never drift apart.
#[derive(Debug, Clone, Default)]
pub struct StringsTable {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl StringsTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the index in sync.
    ///
    /// Duplicate keys follow last-wins semantics: the new entry replaces the
    /// previous one in place, so entry order stays the order of first
    /// appearance.
    pub fn insert(&mut self, entry: Entry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in order of first appearance
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All keys, in entry order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
