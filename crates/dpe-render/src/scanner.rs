//! Single-pass block scanner for the report markup dialect.
//!
//! Lines are classified in a fixed priority order and dispatched to the
//! inline, table, callout and chart renderers. The scanner keeps four pieces
//! of state between lines: the open list kind, the pending table rows, the
//! open callout and the section counter. All of it lives in one
//! [`BlockScanner`] value per document, so documents can be rendered
//! concurrently.

use std::sync::LazyLock;

use regex::Regex;

use crate::callout::{CalloutKind, OpenCallout};
use crate::directive::ChartDirective;
use crate::inline::{Badges, render_inline};
use crate::section::Section;
use crate::table::render_table;

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)$").unwrap());

/// `Classe D → B`, `d -> c`, `classe E vers classe B`.
static GRADE_TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:classe|class)?\s*([A-G])\s*(?:→|->|vers)\s*(?:classe\s*)?([A-G])").unwrap()
});

/// Result of scanning a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Body HTML fragments, concatenated in document order.
    pub html: String,
    /// Top-level sections in document order.
    pub sections: Vec<Section>,
}

/// Classification of a single trimmed line, in dispatch priority order.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `:::` followed by anything (possibly nothing).
    CalloutMarker(&'a str),
    /// `# Title`
    Section(&'a str),
    /// `<!-- chart-kind: {...} -->`
    Chart(ChartDirective<'a>),
    /// `| ... |`
    TableRow,
    /// `### Title`
    Heading3(&'a str),
    /// `## Title`
    Heading2(&'a str),
    /// `- item` or `• item`
    Bullet(&'a str),
    /// `1. item`
    Ordered(&'a str),
    Blank,
    Paragraph,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(":::") {
            return Self::CalloutMarker(rest.trim());
        }
        if let Some(title) = strip_heading(line, 1) {
            return Self::Section(title);
        }
        if let Some(directive) = ChartDirective::parse_line(line) {
            return Self::Chart(directive);
        }
        if line.starts_with('|') && line.ends_with('|') {
            return Self::TableRow;
        }
        if let Some(title) = strip_heading(line, 3) {
            return Self::Heading3(title);
        }
        if let Some(title) = strip_heading(line, 2) {
            return Self::Heading2(title);
        }
        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("• ")) {
            return Self::Bullet(item);
        }
        if let Some(caps) = ORDERED_ITEM_RE.captures(line)
            && let Some(item) = caps.get(1)
        {
            return Self::Ordered(item.as_str());
        }
        if line.is_empty() {
            return Self::Blank;
        }
        Self::Paragraph
    }
}

/// Strip exactly `level` leading `#` followed by at least one whitespace character.
fn strip_heading(line: &str, level: usize) -> Option<&str> {
    let rest = line.strip_prefix(&"#".repeat(level)[..])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim_start();
    (!title.is_empty()).then_some(title)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Per-document scanner state.
///
/// # Example
///
/// ```
/// use dpe_render::BlockScanner;
///
/// let result = BlockScanner::new().render("# Intro\n- un\n- deux");
/// assert_eq!(result.sections.len(), 1);
/// assert!(result.html.contains("<ul><li>un</li><li>deux</li></ul>"));
/// ```
#[derive(Debug, Default)]
pub struct BlockScanner {
    output: String,
    list: Option<ListKind>,
    table: Vec<String>,
    callout: Option<OpenCallout>,
    sections: Vec<Section>,
}

impl BlockScanner {
    /// Create a scanner with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            ..Self::default()
        }
    }

    /// Scan `text` line by line and return the body HTML and sections.
    ///
    /// Never fails: any input produces some output.
    #[must_use]
    pub fn render(mut self, text: &str) -> RenderResult {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        for raw in text.split('\n') {
            self.process_line(raw);
        }
        self.finish()
    }

    fn process_line(&mut self, raw: &str) {
        let line = raw.trim();
        let kind = Line::classify(line);

        if let Line::CalloutMarker(name) = kind {
            self.callout_marker(name);
            return;
        }

        if let Some(callout) = &mut self.callout {
            callout.push(raw);
            return;
        }

        match kind {
            Line::Section(title) => {
                self.close_list();
                self.flush_table();
                self.open_section(title);
            }
            Line::Chart(directive) => {
                self.close_list();
                self.flush_table();
                self.output.push_str(&directive.render());
            }
            Line::TableRow => {
                self.close_list();
                self.table.push(line.to_owned());
            }
            other => {
                self.flush_table();
                self.block_line(other, line);
            }
        }
    }

    /// Handle a `:::` line. Any marker closes an open callout; otherwise a
    /// known kind opens one and an unknown kind drops the line.
    fn callout_marker(&mut self, name: &str) {
        if let Some(callout) = self.callout.take() {
            callout.render(&mut self.output);
            return;
        }
        match CalloutKind::parse(name) {
            Some(kind) => {
                self.close_list();
                self.flush_table();
                self.callout = Some(OpenCallout::new(kind));
            }
            None => {
                tracing::debug!(kind = name, "Dropping line with unknown callout kind");
            }
        }
    }

    fn open_section(&mut self, title: &str) {
        let section = Section {
            number: u32::try_from(self.sections.len() + 1).unwrap_or(u32::MAX),
            title: title.to_owned(),
        };
        section.render_separator(&mut self.output);
        self.sections.push(section);
    }

    /// Lines that are not callout, section, chart or table lines.
    fn block_line(&mut self, kind: Line<'_>, line: &str) {
        match kind {
            Line::Heading3(title) => {
                self.close_list();
                self.push_element("h3", &render_inline(title, Badges::Suppress));
            }
            Line::Heading2(title) => {
                self.close_list();
                self.push_element("h2", &render_inline(title, Badges::Suppress));
            }
            Line::Bullet(item) => {
                self.open_list(ListKind::Bullet);
                self.push_element("li", &render_inline(item, Badges::Show));
            }
            Line::Ordered(item) => {
                self.open_list(ListKind::Ordered);
                self.push_element("li", &render_inline(item, Badges::Show));
            }
            Line::Blank => self.close_list(),
            _ => {
                self.close_list();
                self.push_element("p", &render_inline(line, Badges::Show));
                if !line.starts_with('|') {
                    self.grade_transition(line);
                }
            }
        }
    }

    /// Append a before/after chart when the line mentions a grade change.
    fn grade_transition(&mut self, line: &str) {
        let Some(caps) = GRADE_TRANSITION_RE.captures(line) else {
            return;
        };
        if let (Some(before), Some(after)) = (caps.get(1), caps.get(2)) {
            self.output
                .push_str(&dpe_charts::before_after_chart(before.as_str(), after.as_str()));
        }
    }

    fn push_element(&mut self, tag: &str, inner: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        self.output.push_str(inner);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn open_list(&mut self, kind: ListKind) {
        if self.list == Some(kind) {
            return;
        }
        self.close_list();
        self.output.push('<');
        self.output.push_str(kind.tag());
        self.output.push('>');
        self.list = Some(kind);
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            self.output.push_str("</");
            self.output.push_str(kind.tag());
            self.output.push('>');
        }
    }

    fn flush_table(&mut self) {
        if !self.table.is_empty() {
            render_table(&self.table, &mut self.output);
            self.table.clear();
        }
    }

    fn finish(mut self) -> RenderResult {
        self.close_list();
        self.flush_table();
        if let Some(callout) = self.callout.take() {
            callout.render(&mut self.output);
        }
        RenderResult {
            html: self.output,
            sections: self.sections,
        }
    }
}

/// Render a report with a fresh [`BlockScanner`].
#[must_use]
pub fn render_report(text: &str) -> RenderResult {
    BlockScanner::new().render(text)
}
