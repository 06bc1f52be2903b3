//! Merge reports
//!
//! Records what a merge did to a catalog: which keys were newly extracted,
//! which stale keys were pruned, and how many translations survived. Reports
//! can be persisted as JSON for localization audits.

use crate::error::{Error, Result};
use crate::table::StringsTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Summary of a single merge operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// When the merge ran
    pub timestamp: DateTime<Utc>,
    /// Number of entries in the merged table (equals NEW's key count)
    pub total: usize,
    /// Keys present in both tables whose translations were kept
    pub retained: usize,
    /// Keys introduced by NEW, in NEW's entry order
    pub added_keys: Vec<String>,
    /// Stale keys present only in OLD, in OLD's entry order
    pub dropped_keys: Vec<String>,
}

impl MergeReport {
    /// Build a report by comparing the two merge inputs
    pub fn compare(old: &StringsTable, new: &StringsTable) -> Self {
        let added_keys: Vec<String> = new
            .keys()
            .filter(|k| !old.contains_key(k))
            .map(String::from)
            .collect();
        let dropped_keys: Vec<String> = old
            .keys()
            .filter(|k| !new.contains_key(k))
            .map(String::from)
            .collect();

        Self {
            timestamp: Utc::now(),
            total: new.len(),
            retained: new.len() - added_keys.len(),
            added_keys,
            dropped_keys,
        }
    }

    /// Load a report from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the report as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
