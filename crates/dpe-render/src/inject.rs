//! Chart-directive injection.
//!
//! Language-model output rarely follows the directive grammar reliably, so
//! charts are not requested from the model. Instead the finished report text
//! is searched for the values the charts need, and directive lines are
//! inserted after the matching headings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

static ENERGY_GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Classe\s+énergétique\s+actuelle\s*\|\s*([A-G])").unwrap()
});

static EMISSIONS_GRADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Classe\s+climat[^|]*\|\s*([A-G])").unwrap());

const ENERGY_HEADING: &str = "# Votre score énergétique";
const LOSSES_HEADING: &str = "# Analyse des déperditions\n";

/// Loss keyword, with its table-cell and prose patterns, in payload order.
struct LossKeyword {
    key: &'static str,
    table: Regex,
    prose: Regex,
}

impl LossKeyword {
    fn new(key: &'static str, pattern: &str) -> Self {
        Self {
            key,
            table: Regex::new(&format!(r"(?i){pattern}[^|]*\|\s*(\d+)\s*%?")).unwrap(),
            prose: Regex::new(&format!(r"(?i){pattern}[^\d]{{0,40}}(\d+)\s*%")).unwrap(),
        }
    }

    /// Percentage for this keyword in `section`, table form first.
    fn find(&self, section: &str) -> Option<u64> {
        let caps = self
            .table
            .captures(section)
            .or_else(|| self.prose.captures(section))?;
        caps.get(1)?.as_str().parse().ok()
    }
}

static LOSS_KEYWORDS: LazyLock<Vec<LossKeyword>> = LazyLock::new(|| {
    vec![
        LossKeyword::new("murs", "murs"),
        LossKeyword::new("toiture", "toiture"),
        LossKeyword::new("menuiseries", "menuiseries"),
        LossKeyword::new("planchers", "planchers"),
        LossKeyword::new("ponts_thermiques", r"ponts\s*thermiques"),
    ]
});

/// Minimum number of loss categories needed for a breakdown chart.
const MIN_LOSS_CATEGORIES: usize = 2;

/// Insert `chart-classe` and `chart-deperditions` directives into a report.
///
/// Text without the expected headings or values is returned unchanged.
///
/// # Example
///
/// ```
/// use dpe_render::inject_chart_directives;
///
/// let text = "# Votre score énergétique\n| Classe énergétique actuelle | E |\n";
/// let injected = inject_chart_directives(text);
/// assert!(injected.contains(r#"<!-- chart-classe:{"classe":"E"} -->"#));
/// ```
#[must_use]
pub fn inject_chart_directives(text: &str) -> String {
    let mut result = text.to_owned();

    if let Some(marker) = energy_label_marker(text) {
        if let Some(at) = line_end_after(&result, ENERGY_HEADING) {
            insert_line(&mut result, at, &marker);
        } else {
            tracing::debug!("Energy grade found but no score heading to attach the chart to");
        }
    }

    if let Some((at, marker)) = loss_breakdown_marker(&result) {
        insert_line(&mut result, at, &marker);
    }

    result
}

fn energy_label_marker(text: &str) -> Option<String> {
    let energy = ENERGY_GRADE_RE.captures(text)?.get(1)?.as_str();

    let mut data = Map::new();
    data.insert("classe".to_owned(), energy.to_ascii_uppercase().into());
    if let Some(emissions) = EMISSIONS_GRADE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
    {
        data.insert(
            "classe_co2".to_owned(),
            emissions.as_str().to_ascii_uppercase().into(),
        );
    }

    Some(format!("<!-- chart-classe:{} -->", Value::Object(data)))
}

/// Directive for the losses section and the offset just after its heading line.
fn loss_breakdown_marker(text: &str) -> Option<(usize, String)> {
    let body_start = text.find(LOSSES_HEADING)? + LOSSES_HEADING.len();
    let rest = &text[body_start..];
    let section = rest.find("\n# ").map_or(rest, |end| &rest[..end]);

    let mut data = Map::new();
    for keyword in LOSS_KEYWORDS.iter() {
        if let Some(percent) = keyword.find(section) {
            data.insert(keyword.key.to_owned(), percent.into());
        }
    }

    if data.len() < MIN_LOSS_CATEGORIES {
        tracing::debug!(
            found = data.len(),
            "Not enough loss categories for a breakdown chart"
        );
        return None;
    }

    Some((
        body_start,
        format!("<!-- chart-deperditions:{} -->", Value::Object(data)),
    ))
}

/// Offset just past the end of the line containing the first `needle`.
fn line_end_after(text: &str, needle: &str) -> Option<usize> {
    let start = text.find(needle)?;
    Some(
        text[start..]
            .find('\n')
            .map_or(text.len(), |newline| start + newline + 1),
    )
}

/// Insert `line` as its own line at byte offset `at`, which must be a line start
/// or the end of the text.
fn insert_line(text: &mut String, at: usize, line: &str) {
    let mut inserted = String::with_capacity(line.len() + 2);
    if at == text.len() && !text.ends_with('\n') {
        inserted.push('\n');
    }
    inserted.push_str(line);
    inserted.push('\n');
    text.insert_str(at, &inserted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_energy_label_after_score_heading() {
        let text = "# Votre score énergétique\n\
                    | Critère | Valeur |\n\
                    | Classe énergétique actuelle | D |\n\
                    | Classe climat (GES) | B |\n";
        assert_eq!(
            inject_chart_directives(text),
            "# Votre score énergétique\n\
             <!-- chart-classe:{\"classe\":\"D\",\"classe_co2\":\"B\"} -->\n\
             | Critère | Valeur |\n\
             | Classe énergétique actuelle | D |\n\
             | Classe climat (GES) | B |\n"
        );
    }

    #[test]
    fn test_energy_label_without_emissions() {
        let text = "# Votre score énergétique (DPE)\n| classe ÉNERGÉTIQUE actuelle | f |";
        let injected = inject_chart_directives(text);
        assert!(injected.starts_with(
            "# Votre score énergétique (DPE)\n<!-- chart-classe:{\"classe\":\"F\"} -->\n"
        ));
    }

    #[test]
    fn test_energy_label_needs_heading() {
        let text = "| Classe énergétique actuelle | D |\n";
        assert_eq!(inject_chart_directives(text), text);
    }

    #[test]
    fn test_energy_heading_on_last_line() {
        let text = "| Classe énergétique actuelle | C |\n# Votre score énergétique";
        assert_eq!(
            inject_chart_directives(text),
            format!("{text}\n<!-- chart-classe:{{\"classe\":\"C\"}} -->\n")
        );
    }

    #[test]
    fn test_losses_table_form() {
        let text = "# Analyse des déperditions\n\
                    | Poste | Part |\n\
                    | Murs extérieurs | 35% |\n\
                    | Toiture | 25 % |\n\
                    | Ponts thermiques | 10 |\n\
                    # Suite\n\
                    | Planchers | 99% |\n";
        let injected = inject_chart_directives(text);
        assert!(injected.starts_with(
            "# Analyse des déperditions\n\
             <!-- chart-deperditions:{\"murs\":35,\"toiture\":25,\"ponts_thermiques\":10} -->\n\
             | Poste |"
        ));
    }

    #[test]
    fn test_losses_prose_form() {
        let text = "## Analyse des déperditions\n\
                    Les murs représentent environ 30% des pertes, la toiture : 20 %.\n";
        let injected = inject_chart_directives(text);
        assert_eq!(
            injected,
            "## Analyse des déperditions\n\
             <!-- chart-deperditions:{\"murs\":30,\"toiture\":20} -->\n\
             Les murs représentent environ 30% des pertes, la toiture : 20 %.\n"
        );
    }

    #[test]
    fn test_losses_need_two_categories() {
        let text = "# Analyse des déperditions\n| Murs | 40% |\n";
        assert_eq!(inject_chart_directives(text), text);
    }

    #[test]
    fn test_losses_heading_must_end_line() {
        let text = "# Analyse des déperditions thermiques\n| Murs | 40% |\n| Toiture | 20% |\n";
        assert_eq!(inject_chart_directives(text), text);
    }

    #[test]
    fn test_both_charts() {
        let text = "# Votre score énergétique\n\
                    | Classe énergétique actuelle | G |\n\
                    # Analyse des déperditions\n\
                    | Menuiseries | 15% |\n\
                    | Planchers bas | 12% |\n";
        let injected = inject_chart_directives(text);
        assert_eq!(injected.matches("<!-- chart-classe:").count(), 1);
        assert!(injected.contains(
            "# Analyse des déperditions\n<!-- chart-deperditions:{\"menuiseries\":15,\"planchers\":12} -->\n"
        ));
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Rien à signaler.\n";
        assert_eq!(inject_chart_directives(text), text);
    }
}
