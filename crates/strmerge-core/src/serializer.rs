//! Serializer for .strings tables
//!
//! Output is the genstrings layout: comment block, translation line, blank
//! separator line. Multi-line block comments are collapsed at serialize time
//! so translators see the whole comment on one readable line.

use crate::error::{Error, Result};
use crate::table::StringsTable;
use std::fs;
use std::path::Path;

/// Collapse a comment block of 3+ lines into two lines: the opening line,
/// then the interior and closing lines joined with `" - "`.
///
/// Interior lines keep their own leading whitespace; every following line is
/// left-stripped. An interior line that strips to empty contributes no
/// separator. Blocks of fewer than 3 lines pass through untouched, which
/// also makes the collapse idempotent: its output is always 2 lines.
fn collapse_block(comments: &[String]) -> Vec<String> {
    let n = comments.len();
    if n < 3 {
        return comments.to_vec();
    }

    let mut collapsed = String::new();
    for i in 1..n {
        let line = if i >= 2 {
            comments[i].trim_start()
        } else {
            comments[i].as_str()
        };
        collapsed.push_str(line);
        if i <= n - 2 && !(i >= 2 && line.is_empty()) {
            collapsed.push_str(" - ");
        }
    }

    vec![comments[0].clone(), collapsed]
}

/// Serialize a table back to .strings text.
///
/// Entries render in table order as comment block, raw translation line,
/// blank separator line. For tables parsed from genstrings output with no
/// comment block of 3+ lines this is a byte-for-byte round trip.
pub fn serialize(table: &StringsTable) -> String {
    let mut out = String::new();
    for entry in table.entries() {
        for line in collapse_block(&entry.comments) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&entry.raw_line);
        out.push_str("\n\n");
    }
    out
}

/// Serialize a table and write it to a file
pub fn write_file<P: AsRef<Path>>(table: &StringsTable, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize(table)).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const BASIC: &str = "/* Comment for greeting */\n\"greeting.hello\" = \"Hello\";\n\n// Short comment\n\"farewell.bye\" = \"Goodbye\";\n\n";

    #[test]
    fn test_round_trip_is_byte_equal() {
        let table = parse(BASIC).unwrap();
        assert_eq!(serialize(&table), BASIC);
    }

    #[test]
    fn test_round_trip_two_line_block_untouched() {
        let text = "/* short\nblock */\n\"k\" = \"v\";\n\n";
        let table = parse(text).unwrap();
        assert_eq!(serialize(&table), text);
    }

    #[test]
    fn test_collapse_three_line_block() {
        let text =
            "/* Translators: a long\n   explanation of context\n   for this key */\n\"k\" = \"v\";\n\n";
        let table = parse(text).unwrap();
        assert_eq!(
            serialize(&table),
            "/* Translators: a long\n   explanation of context - for this key */\n\"k\" = \"v\";\n\n"
        );
    }

    #[test]
    fn test_collapse_four_line_block() {
        let comments = vec![
            "/* one".to_string(),
            "two".to_string(),
            "  three".to_string(),
            "  four */".to_string(),
        ];
        assert_eq!(
            collapse_block(&comments),
            vec!["/* one".to_string(), "two - three - four */".to_string()]
        );
    }

    #[test]
    fn test_collapse_skips_blank_interior_line() {
        let comments = vec![
            "/* head".to_string(),
            "middle".to_string(),
            "   ".to_string(),
            "tail */".to_string(),
        ];
        assert_eq!(
            collapse_block(&comments),
            vec!["/* head".to_string(), "middle - tail */".to_string()]
        );
    }

    #[test]
    fn test_serialize_is_stable_fixed_point() {
        let text = "/* a\nb\nc */\n\"k\" = \"v\";\n\n";
        let once = serialize(&parse(text).unwrap());
        let twice = serialize(&parse(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_does_not_mutate_table() {
        let text = "/* a\nb\nc */\n\"k\" = \"v\";\n\n";
        let table = parse(text).unwrap();
        let _ = serialize(&table);
        // Normalization happens in the rendered text only
        assert_eq!(table.get("k").unwrap().comments.len(), 3);
    }

    #[test]
    fn test_serialize_empty_table() {
        assert_eq!(serialize(&StringsTable::new()), "");
    }
}
