//! Key figures pulled from the report text for the summary panel.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

static ENERGY_GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Classe\s+énergétique\s+actuelle[^|]*\|\s*([A-G])").unwrap()
});
static SURFACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Surface\s+habitable[^|]*\|\s*([\d\s]+)m").unwrap());
static CONSTRUCTION_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Année\s+de\s+construction[^|]*\|\s*(\d{4})").unwrap());
static ANNUAL_COST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Coût\s+annuel[^|]*\|\s*([\d\s]+)€").unwrap());

/// Summary values found in table rows of the report. Each is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFields {
    pub energy_grade: Option<String>,
    /// Habitable surface in m², digits and inner spaces only.
    pub surface: Option<String>,
    pub construction_year: Option<String>,
    /// Estimated annual energy cost in euros.
    pub annual_cost: Option<String>,
}

impl SummaryFields {
    /// Search `text` for each field. Unmatched fields stay `None`.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let capture = |re: &Regex| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_owned())
        };
        Self {
            energy_grade: capture(&ENERGY_GRADE_RE),
            surface: capture(&SURFACE_RE),
            construction_year: capture(&CONSTRUCTION_YEAR_RE),
            annual_cost: capture(&ANNUAL_COST_RE),
        }
    }

    /// Render the panel. The container is emitted even when no field matched.
    pub(crate) fn render(&self, html: &mut String, primary: &str) {
        html.push_str("<div class=\"summary-card\">\n");
        html.push_str("<div class=\"summary-title\">📊 Synthèse du diagnostic</div>\n");
        html.push_str("<div class=\"summary-grid\">\n");

        if let Some(grade) = &self.energy_grade {
            let _ = write!(
                html,
                "<div class=\"summary-item\"><div class=\"summary-label\">Classe énergétique</div>\
                 <div class=\"summary-value summary-value-large\" style=\"color: {primary}\">{grade}</div></div>\n"
            );
        }
        if let Some(surface) = &self.surface {
            render_item(html, "Surface habitable", &format!("{surface} m²"));
        }
        if let Some(year) = &self.construction_year {
            render_item(html, "Année de construction", year);
        }
        if let Some(cost) = &self.annual_cost {
            render_item(html, "Coût annuel estimé", &format!("{cost} €"));
        }

        html.push_str("</div>\n</div>\n");
    }
}

fn render_item(html: &mut String, label: &str, value: &str) {
    let _ = write!(
        html,
        "<div class=\"summary-item\"><div class=\"summary-label\">{label}</div>\
         <div class=\"summary-value\">{value}</div></div>\n"
    );
}
