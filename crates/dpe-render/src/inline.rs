//! Inline formatting within a single line: escaping, emphasis and priority badges.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Priority triggers, longest alternative first so the longest word wins.
///
/// Word boundaries are checked by hand in [`apply_badges`] because they must
/// treat accented letters as word characters.
static BADGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(urgents?)",
        r"|(recommandées|recommandés|recommandes|recommandé|recommande)",
        r"|(optionnelles?|optionnels?)"
    ))
    .unwrap()
});

const BADGE_URGENT: &str = r#"<span class="badge badge-urgent">🔴 URGENT</span>"#;
const BADGE_RECOMMENDED: &str = r#"<span class="badge badge-recommended">⚠️ RECOMMANDÉ</span>"#;
const BADGE_OPTIONAL: &str = r#"<span class="badge badge-optional">ℹ️ OPTIONNEL</span>"#;

/// Whether priority words are turned into badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badges {
    /// Replace priority words with colored badges (body text, table cells).
    Show,
    /// Leave priority words as text (headings).
    Suppress,
}

/// Escape the three characters that would otherwise open markup.
///
/// Quotes are left alone: output is only ever placed in element content.
///
/// # Examples
///
/// ```
/// use dpe_render::escape_html;
///
/// assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render one line of inline markup to HTML.
///
/// Escapes first, then `**strong**`, then `*emphasis*`, then (unless
/// suppressed) priority badges for the words *urgent*, *recommandé* and
/// *optionnel* and their inflections.
///
/// # Examples
///
/// ```
/// use dpe_render::{Badges, render_inline};
///
/// assert_eq!(
///     render_inline("**Isolation** des *combles*", Badges::Show),
///     "<strong>Isolation</strong> des <em>combles</em>"
/// );
/// ```
#[must_use]
pub fn render_inline(text: &str, badges: Badges) -> String {
    let escaped = escape_html(text);
    let strong = STRONG_RE.replace_all(&escaped, "<strong>$1</strong>");
    let emphasized = EMPHASIS_RE.replace_all(&strong, "<em>$1</em>");
    match badges {
        Badges::Show => apply_badges(&emphasized),
        Badges::Suppress => emphasized.into_owned(),
    }
}

fn apply_badges(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for caps in BADGE_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if before.is_some_and(is_word_letter) || after.is_some_and(is_word_letter) {
            continue;
        }
        result.push_str(&text[last..m.start()]);
        result.push_str(badge_for(&caps));
        last = m.end();
    }

    result.push_str(&text[last..]);
    result
}

fn badge_for(caps: &Captures<'_>) -> &'static str {
    if caps.get(1).is_some() {
        BADGE_URGENT
    } else if caps.get(2).is_some() {
        BADGE_RECOMMENDED
    } else {
        BADGE_OPTIONAL
    }
}

/// Latin letters including the Latin-1 accented range, in either case.
fn is_word_letter(c: char) -> bool {
    c.to_lowercase()
        .all(|l| l.is_ascii_lowercase() || ('à'..='ÿ').contains(&l))
        && c.is_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_only_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), r#"&lt;a href="x"&gt;&amp;'"#);
    }

    #[test]
    fn test_escape_applied_once() {
        assert_eq!(
            render_inline("**a & b**", Badges::Show),
            "<strong>a &amp; b</strong>"
        );
        assert_eq!(render_inline("&amp;", Badges::Show), "&amp;amp;");
    }

    #[test]
    fn test_strong_and_emphasis() {
        assert_eq!(
            render_inline("**un** et *deux* et **trois**", Badges::Show),
            "<strong>un</strong> et <em>deux</em> et <strong>trois</strong>"
        );
    }

    #[test]
    fn test_emphasis_is_non_greedy() {
        assert_eq!(
            render_inline("*a* b *c*", Badges::Show),
            "<em>a</em> b <em>c</em>"
        );
    }

    #[test]
    fn test_unmatched_markers_left_alone() {
        assert_eq!(render_inline("5 * 3", Badges::Show), "5 * 3");
    }

    #[test]
    fn test_badges() {
        assert_eq!(
            render_inline("Travaux urgents", Badges::Show),
            format!("Travaux {BADGE_URGENT}")
        );
        assert_eq!(
            render_inline("Priorité : Recommandé", Badges::Show),
            format!("Priorité : {BADGE_RECOMMENDED}")
        );
        assert_eq!(
            render_inline("optionnelles", Badges::Show),
            BADGE_OPTIONAL.to_owned()
        );
    }

    #[test]
    fn test_badge_inflections() {
        for word in [
            "urgent",
            "URGENTS",
            "recommandé",
            "recommande",
            "recommandés",
            "recommandées",
            "optionnel",
            "optionnels",
            "optionnelle",
        ] {
            let html = render_inline(word, Badges::Show);
            assert!(html.starts_with("<span class=\"badge"), "{word}: {html}");
        }
    }

    #[test]
    fn test_badges_respect_accented_word_boundaries() {
        assert_eq!(render_inline("urgentissime", Badges::Show), "urgentissime");
        assert_eq!(render_inline("éurgent", Badges::Show), "éurgent");
        assert_eq!(render_inline("urgenté", Badges::Show), "urgenté");
        assert_eq!(render_inline("Recommandée", Badges::Show), "Recommandée");
    }

    #[test]
    fn test_badges_inside_emphasis() {
        assert_eq!(
            render_inline("**urgent**", Badges::Show),
            format!("<strong>{BADGE_URGENT}</strong>")
        );
    }

    #[test]
    fn test_badges_suppressed() {
        assert_eq!(render_inline("urgent", Badges::Suppress), "urgent");
    }

    #[test]
    fn test_word_letter() {
        assert!(is_word_letter('a'));
        assert!(is_word_letter('Z'));
        assert!(is_word_letter('é'));
        assert!(is_word_letter('À'));
        assert!(!is_word_letter(' '));
        assert!(!is_word_letter('>'));
        assert!(!is_word_letter('1'));
    }
}
