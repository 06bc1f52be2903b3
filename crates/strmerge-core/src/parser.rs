//! Line-oriented parser for .strings table text
//!
//! The grammar is the one genstrings emits: a comment block (one `//...` or
//! `/*...*/` line, or a multi-line `/* ... */` block), a `"key" = "value";`
//! translation line, then any number of blank separator lines.

use crate::error::{Error, Result};
use crate::table::{Entry, StringsTable};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Matches a `"key" = "value";` line. Both groups are greedy, so values may
/// contain quotes as long as they don't form an unescaped `" = "` split.
static RE_TRANSLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(.+)" = "(.+)";$"#).expect("translation regex"));

/// Matches a comment that is complete on a single line: `//...` or `/*...*/`
static RE_COMMENT_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(/.*|\*.*\*/)$").expect("single comment regex"));

/// Parse .strings table text into a [`StringsTable`].
///
/// An input with zero entries is valid and yields an empty table. Duplicate
/// keys follow the table's last-wins rule.
pub fn parse(text: &str) -> Result<StringsTable> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // A trailing newline produces one empty final segment; drop it so it
    // isn't mistaken for a blank separator line.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut table = StringsTable::new();
    let mut pos = 0;

    // Leading blank lines
    while pos < lines.len() && lines[pos].is_empty() {
        pos += 1;
    }

    while pos < lines.len() {
        let block_start = pos;
        let mut comments = vec![lines[pos].to_string()];

        if !RE_COMMENT_SINGLE.is_match(lines[pos]) {
            // Block comment: runs line by line until one ends with `*/`
            while !lines[pos].ends_with("*/") {
                pos += 1;
                match lines.get(pos) {
                    Some(line) => comments.push(line.to_string()),
                    None => {
                        return Err(Error::UnterminatedComment {
                            line: block_start + 1,
                        })
                    }
                }
            }
        }
        pos += 1;

        // The line after the comment block must be a translation pair
        let line = lines.get(pos).copied().unwrap_or("");
        match RE_TRANSLATION.captures(line) {
            Some(caps) => {
                table.insert(Entry::new(comments, &caps[1], &caps[2], line));
            }
            None => {
                return Err(Error::InvalidTranslation {
                    line: pos + 1,
                    text: line.to_string(),
                })
            }
        }
        pos += 1;

        // Blank lines separating this entry from the next comment block
        while pos < lines.len() && lines[pos].is_empty() {
            pos += 1;
        }
    }

    Ok(table)
}

/// Read and parse a .strings file. The canonical encoding is UTF-8; files
/// that are not valid UTF-8 fail here with [`Error::FileRead`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<StringsTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let text = "/* Comment for greeting */\n\"greeting.hello\" = \"Hello\";\n\n// Short comment\n\"farewell.bye\" = \"Goodbye\";\n";
        let table = parse(text).unwrap();

        assert_eq!(table.len(), 2);
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["greeting.hello", "farewell.bye"]);

        let hello = table.get("greeting.hello").unwrap();
        assert_eq!(hello.value, "Hello");
        assert_eq!(hello.comments, vec!["/* Comment for greeting */"]);
        assert_eq!(hello.raw_line, "\"greeting.hello\" = \"Hello\";");
    }

    #[test]
    fn test_parse_multiline_block_comment() {
        let text = "/* First line\n   second line\n   third line */\n\"key\" = \"Value\";\n";
        let table = parse(text).unwrap();

        let entry = table.get("key").unwrap();
        assert_eq!(
            entry.comments,
            vec!["/* First line", "   second line", "   third line */"]
        );
    }

    #[test]
    fn test_parse_skips_leading_and_separator_blanks() {
        let text = "\n\n/* a */\n\"a\" = \"1\";\n\n\n/* b */\n\"b\" = \"2\";\n";
        let table = parse(text).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_value_with_quotes() {
        let text = "/* c */\n\"key\" = \"say \\\"hi\\\" now\";\n";
        let table = parse(text).unwrap();
        assert_eq!(table.get("key").unwrap().value, "say \\\"hi\\\" now");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_translation_line() {
        let text = "/* c */\n\"key\" \"missingequals\";\n";
        let err = parse(text).unwrap_err();
        assert!(err.is_format_error());
        match err {
            Error::InvalidTranslation { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "\"key\" \"missingequals\";");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_missing_translation_at_eof() {
        let text = "/* comment with nothing after it */\n";
        assert!(matches!(
            parse(text),
            Err(Error::InvalidTranslation { .. })
        ));
    }

    #[test]
    fn test_parse_unterminated_block_comment() {
        let text = "/* never closed\nstill going\n";
        let err = parse(text).unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(err, Error::UnterminatedComment { line: 1 }));
    }

    #[test]
    fn test_parse_duplicate_key_last_wins() {
        let text = "/* one */\n\"dup\" = \"first\";\n\n/* two */\n\"dup\" = \"second\";\n";
        let table = parse(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("dup").unwrap().value, "second");
        assert_eq!(table.get("dup").unwrap().comments, vec!["/* two */"]);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/Localizable.strings").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
