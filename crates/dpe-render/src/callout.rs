//! Highlighted callout blocks: `:::info` … `:::`.

use std::fmt::Write;

use crate::inline::{Badges, render_inline};

/// The four callout flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Warning,
    Tip,
    Danger,
}

impl CalloutKind {
    /// Parse the name written after `:::`. Exact, lowercase match only.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "tip" => Some(Self::Tip),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Tip => "tip",
            Self::Danger => "danger",
        }
    }

    /// `(icon, title, accent color, background color)`.
    fn style(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Info => ("💡", "Info", "#3b82f6", "#eff6ff"),
            Self::Warning => ("⚠️", "Attention", "#f59e0b", "#fffbeb"),
            Self::Tip => ("✅", "Conseil", "#10b981", "#f0fdf4"),
            Self::Danger => ("🚨", "Important", "#ef4444", "#fef2f2"),
        }
    }
}

/// An open callout accumulating raw lines until its closing marker.
#[derive(Debug)]
pub(crate) struct OpenCallout {
    kind: CalloutKind,
    lines: Vec<String>,
}

impl OpenCallout {
    pub(crate) fn new(kind: CalloutKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    /// Emit the callout. Blank interior lines become `<br>`.
    pub(crate) fn render(self, out: &mut String) {
        let (icon, title, color, background) = self.kind.style();
        write!(
            out,
            r#"<div class="callout callout-{}" style="border-left: 4px solid {color}; background: {background}"><div class="callout-header" style="color: {color}"><span class="callout-icon">{icon}</span><span class="callout-title">{title}</span></div><div class="callout-content">"#,
            self.kind.name()
        )
        .unwrap();

        for line in &self.lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                out.push_str("<br>");
            } else {
                out.push_str("<p>");
                out.push_str(&render_inline(trimmed, Badges::Show));
                out.push_str("</p>");
            }
        }

        out.push_str("</div></div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        assert_eq!(CalloutKind::parse("info"), Some(CalloutKind::Info));
        assert_eq!(CalloutKind::parse("warning"), Some(CalloutKind::Warning));
        assert_eq!(CalloutKind::parse("tip"), Some(CalloutKind::Tip));
        assert_eq!(CalloutKind::parse("danger"), Some(CalloutKind::Danger));
        assert_eq!(CalloutKind::parse("note"), None);
        assert_eq!(CalloutKind::parse("Info"), None);
        assert_eq!(CalloutKind::parse(""), None);
    }

    #[test]
    fn test_render_warning() {
        let mut callout = OpenCallout::new(CalloutKind::Warning);
        callout.push("  Ligne **une**");
        callout.push("");
        callout.push("Ligne deux");
        let mut out = String::new();
        callout.render(&mut out);

        assert!(out.starts_with(r#"<div class="callout callout-warning""#));
        assert!(out.contains("border-left: 4px solid #f59e0b; background: #fffbeb"));
        assert!(out.contains(r#"<span class="callout-title">Attention</span>"#));
        assert!(out.ends_with(
            r#"<div class="callout-content"><p>Ligne <strong>une</strong></p><br><p>Ligne deux</p></div></div>"#
        ));
    }

    #[test]
    fn test_render_empty_callout() {
        let mut out = String::new();
        OpenCallout::new(CalloutKind::Tip).render(&mut out);
        assert_eq!(out.matches("callout-content").count(), 1);
        assert!(out.ends_with(r#"<div class="callout-content"></div></div>"#));
    }
}
