//! Numbered top-level sections and their separator banners.

use std::fmt::Write;

use crate::inline::escape_html;

/// Banner colors, cycled by section number.
pub const SECTION_COLORS: [&str; 5] = ["#47b5e8", "#7ed321", "#f5a623", "#4a90e2", "#bd10e0"];

/// A top-level heading, numbered from 1 in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Sequential number (1-based).
    pub number: u32,
    /// Heading text, unescaped.
    pub title: String,
}

impl Section {
    /// Banner color: `SECTION_COLORS[(number - 1) % 5]`.
    #[must_use]
    pub fn color(&self) -> &'static str {
        let index = self.number.saturating_sub(1) as usize % SECTION_COLORS.len();
        SECTION_COLORS[index]
    }

    /// Two-digit, zero-padded display number (`"01"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }

    /// Anchor id used by the separator and the table of contents.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("section-{}", self.label())
    }

    pub(crate) fn render_separator(&self, out: &mut String) {
        write!(
            out,
            r#"<div class="section-separator" id="{}" style="background: {}"><div class="section-number">{}.</div><div class="section-title">{}</div></div>"#,
            self.anchor(),
            self.color(),
            self.label(),
            escape_html(&self.title)
        )
        .unwrap();
    }
}
