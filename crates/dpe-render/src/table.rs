//! Pipe-delimited tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::{Badges, render_inline};

/// Alignment row such as `| --- | :---: |`.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:|]+\|$").unwrap());

/// Split a `| a | b |` row into trimmed cells.
///
/// The empty boundary cells before the first and after the last pipe are
/// discarded.
#[must_use]
pub fn parse_row(line: &str) -> Vec<&str> {
    let cells: Vec<&str> = line.split('|').collect();
    if cells.len() < 2 {
        return Vec::new();
    }
    cells[1..cells.len() - 1].iter().map(|c| c.trim()).collect()
}

/// Whether `line` is an alignment row made only of pipes, dashes, colons and spaces.
#[must_use]
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_RE.is_match(line.trim())
}

/// Render buffered table lines.
///
/// The first line is always the header. Separator rows after it are dropped.
/// Rows are not padded or truncated to the header's column count.
pub fn render_table<S: AsRef<str>>(lines: &[S], out: &mut String) {
    let Some((header, body)) = lines.split_first() else {
        return;
    };

    out.push_str("<table><thead><tr>");
    for cell in parse_row(header.as_ref()) {
        out.push_str("<th>");
        out.push_str(&render_inline(cell, Badges::Show));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");

    for row in body.iter().map(AsRef::as_ref) {
        if is_separator_row(row) {
            continue;
        }
        out.push_str("<tr>");
        for cell in parse_row(row) {
            out.push_str("<td>");
            out.push_str(&render_inline(cell, Badges::Show));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(lines: &[&str]) -> String {
        let mut out = String::new();
        render_table(lines, &mut out);
        out
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(parse_row("| A | B |"), vec!["A", "B"]);
        assert_eq!(parse_row("|a||c|"), vec!["a", "", "c"]);
        assert_eq!(parse_row("|"), Vec::<&str>::new());
        assert_eq!(parse_row("||"), vec![""]);
    }

    #[test]
    fn test_separator_row() {
        assert!(is_separator_row("| --- | --- |"));
        assert!(is_separator_row("|:---|---:|"));
        assert!(!is_separator_row("| 1 | 2 |"));
        assert!(!is_separator_row("| - | x |"));
    }

    #[test]
    fn test_header_and_body() {
        assert_eq!(
            render(&["| A | B |", "| --- | --- |", "| 1 | 2 |"]),
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_first_line_is_header_even_if_separator() {
        let html = render(&["| --- |", "| x |"]);
        assert!(html.starts_with("<table><thead><tr><th>---</th></tr></thead>"));
        assert!(html.contains("<td>x</td>"));
    }

    #[test]
    fn test_ragged_rows_rendered_as_is() {
        let html = render(&["| A | B |", "| 1 |", "| 1 | 2 | 3 |"]);
        assert!(html.contains("<tr><td>1</td></tr>"));
        assert!(html.contains("<tr><td>1</td><td>2</td><td>3</td></tr>"));
    }

    #[test]
    fn test_cells_use_inline_markup_with_badges() {
        let html = render(&["| Travaux | Priorité |", "| **Toiture** | urgent |"]);
        assert!(html.contains("<td><strong>Toiture</strong></td>"));
        assert!(html.contains("badge-urgent"));
    }

    #[test]
    fn test_empty_buffer_renders_nothing() {
        assert_eq!(render(&[]), "");
    }
}
