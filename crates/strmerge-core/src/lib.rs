//! strmerge-core: Incremental merging of .strings localization tables
//!
//! This library provides functionality to:
//! - Parse `Localizable.strings` files into ordered entry tables
//! - Merge an old catalog (authoritative for translations) with a freshly
//!   extracted one (authoritative for keys, order, and comments)
//! - Serialize tables back out, collapsing long comment blocks
//! - Update catalog files in place, all-or-nothing
//! - Discover per-locale catalogs in a resources tree

pub mod error;
pub mod merger;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod serializer;
pub mod table;

pub use error::{Error, Result};
pub use merger::merge;
pub use parser::{parse, parse_file};
pub use pipeline::{merge_files, refresh_catalog, update_in_place, StringExtractor};
pub use report::MergeReport;
pub use scanner::{find_catalogs, LocaleCatalog, STRINGS_FILE};
pub use serializer::{serialize, write_file};
pub use table::{Entry, StringsTable};
