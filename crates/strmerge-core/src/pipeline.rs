//! File-level merge pipeline
//!
//! Sequences parse, merge, and serialize over real catalog files.
//! Replacement is all-or-nothing: both inputs are parsed fully before
//! anything is written, output lands in a sibling temp file, and the
//! original is only renamed over once serialization succeeded.

use crate::error::{Error, Result};
use crate::merger::merge;
use crate::parser::{parse, parse_file};
use crate::report::MergeReport;
use crate::serializer::{serialize, write_file};
use crate::table::StringsTable;
use std::fs;
use std::path::{Path, PathBuf};

/// External string-extraction tool, seen by the core as an opaque function
/// from source files to canonical UTF-8 table text. Implementations own any
/// tool invocation and encoding conversion; failures surface as
/// [`Error::Extraction`].
pub trait StringExtractor {
    fn extract(&self, sources: &[PathBuf]) -> Result<String>;
}

/// Merge two catalog files into a third.
///
/// Both inputs are parsed before the output is opened, so a malformed input
/// never leaves a partial output behind.
pub fn merge_files<P: AsRef<Path>>(old: P, new: P, output: P) -> Result<MergeReport> {
    let old_table = parse_file(old)?;
    let new_table = parse_file(new)?;
    let merged = merge(&old_table, &new_table);

    write_file(&merged, output)?;

    Ok(MergeReport::compare(&old_table, &new_table))
}

/// Merge a freshly extracted catalog into an existing one, in place.
///
/// With `backup` set, the previous contents survive as `<path>.bak`.
pub fn update_in_place<P: AsRef<Path>>(path: P, new_path: P, backup: bool) -> Result<MergeReport> {
    let path = path.as_ref();
    let old_table = parse_file(path)?;
    let new_table = parse_file(new_path)?;
    let merged = merge(&old_table, &new_table);

    write_replacing(path, &serialize(&merged), backup)?;

    Ok(MergeReport::compare(&old_table, &new_table))
}

/// Run an extractor and reconcile its output with the catalog at `path`.
///
/// If the catalog does not exist yet there is nothing to merge and the
/// extraction output is written out directly.
pub fn refresh_catalog<E: StringExtractor>(
    extractor: &E,
    sources: &[PathBuf],
    path: &Path,
    backup: bool,
) -> Result<MergeReport> {
    let text = extractor.extract(sources)?;
    let new_table = parse(&text)?;

    let old_table = if path.exists() {
        parse_file(path)?
    } else {
        StringsTable::new()
    };

    let merged = merge(&old_table, &new_table);
    write_replacing(path, &serialize(&merged), backup && path.exists())?;

    Ok(MergeReport::compare(&old_table, &new_table))
}

/// Write `text` to a sibling temp file, then rename it over `path`.
fn write_replacing(path: &Path, text: &str, backup: bool) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Localizable.strings");
    let tmp = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp, text).map_err(|e| Error::FileWrite {
        path: tmp.clone(),
        source: e,
    })?;

    if backup {
        let bak = path.with_file_name(format!("{file_name}.bak"));
        if let Err(e) = fs::copy(path, &bak) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::FileWrite {
                path: bak,
                source: e,
            });
        }
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}
