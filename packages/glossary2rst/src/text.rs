//! Whitespace normalization for RST output.

use regex::Regex;
use std::sync::LazyLock;

/// Three or more consecutive newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Strip leading whitespace from every line of a text block.
///
/// Content after the first non-whitespace character of a line is kept as is.
/// A trailing newline is kept, so text ending a line never fuses with the
/// markup that follows it.
///
/// # Examples
/// ```
/// use glossary2rst::text::remove_indent;
///
/// assert_eq!(remove_indent("\n    An API\n    endpoint.  "), "\nAn API\nendpoint.  ");
/// ```
pub fn remove_indent(text: &str) -> String {
    text.split('\n')
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent every non-blank line of a text block by `width` spaces.
///
/// Blank and whitespace-only lines are dropped. The block starts with two
/// newlines so it sits one blank line below whatever precedes it.
///
/// # Examples
/// ```
/// use glossary2rst::text::indent_lines;
///
/// assert_eq!(indent_lines("line1\n\nline2", 4), "\n\n    line1\n    line2");
/// ```
pub fn indent_lines(text: &str, width: usize) -> String {
    let prefix = " ".repeat(width);
    let lines: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{prefix}{line}"))
        .collect();
    format!("\n\n{}", lines.join("\n"))
}

/// Collapse every run of blank lines into a single blank line.
///
/// # Examples
/// ```
/// use glossary2rst::text::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
/// ```
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").into_owned()
}
