//! Whitespace normalization applied after glyph removal.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run, newlines included, into one space and drop
/// leading whitespace. Line structure is lost.
pub fn collapse_document(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    collapsed.trim_start().to_string()
}

/// Collapse whitespace runs within each line, keeping line terminators.
///
/// `\n` and `\r\n` terminators are preserved verbatim. Spaces at the start or
/// end of a line are collapsed but not trimmed.
pub fn collapse_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        out.push_str(&WHITESPACE_RUN.replace_all(body, " "));
        out.push_str(terminator);
    }
    out
}

/// Split a line produced by `split_inclusive('\n')` into body and terminator.
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}
