//! Discovery of per-locale string catalogs
//!
//! Xcode projects keep one `Localizable.strings` per `<locale>.lproj`
//! directory; the scanner finds them all so every locale can be updated
//! against a single fresh extraction.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The strings file to look for inside each `.lproj` directory
pub const STRINGS_FILE: &str = "Localizable.strings";

/// A discovered per-locale catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleCatalog {
    /// Locale code taken from the `.lproj` directory name (e.g. "pt-BR")
    pub locale: String,
    /// Full path to the catalog file
    pub path: PathBuf,
}

/// Scan a directory tree for `<locale>.lproj/Localizable.strings` catalogs,
/// returned sorted by locale code.
pub fn find_catalogs<P: AsRef<Path>>(root: P) -> Result<Vec<LocaleCatalog>> {
    let mut catalogs = Vec::new();

    for entry in WalkDir::new(root.as_ref()).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || entry.file_name() != STRINGS_FILE {
            continue;
        }

        let locale = path
            .parent()
            .filter(|dir| dir.extension().is_some_and(|ext| ext == "lproj"))
            .and_then(|dir| dir.file_stem())
            .and_then(|stem| stem.to_str());

        if let Some(locale) = locale {
            catalogs.push(LocaleCatalog {
                locale: locale.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    catalogs.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(catalogs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_catalog(root: &Path, locale: &str) {
        let dir = root.join(format!("{locale}.lproj"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(STRINGS_FILE), "/* c */\n\"k\" = \"v\";\n\n").unwrap();
    }

    #[test]
    fn test_find_catalogs_sorted_by_locale() {
        let dir = TempDir::new().unwrap();
        let resources = dir.path().join("Resources");
        make_catalog(&resources, "fr");
        make_catalog(&resources, "de");
        make_catalog(&resources, "pt-BR");

        let catalogs = find_catalogs(dir.path()).unwrap();

        let locales: Vec<&str> = catalogs.iter().map(|c| c.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "fr", "pt-BR"]);
    }

    #[test]
    fn test_find_catalogs_ignores_files_outside_lproj() {
        let dir = TempDir::new().unwrap();
        make_catalog(dir.path(), "en");
        fs::write(dir.path().join(STRINGS_FILE), "").unwrap();

        let catalogs = find_catalogs(dir.path()).unwrap();

        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].locale, "en");
    }

    #[test]
    fn test_find_catalogs_empty_tree() {
        let dir = TempDir::new().unwrap();
        assert!(find_catalogs(dir.path()).unwrap().is_empty());
    }
}
