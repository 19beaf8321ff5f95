//! Chart directives: `<!-- chart-<kind>: <json> -->`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<!--\s*chart-(\w+):\s*(.*?)\s*-->$").unwrap());

/// Which chart a directive asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    /// `chart-deperditions`: heat-loss breakdown.
    Losses,
    /// `chart-classe`: energy/emissions label.
    EnergyLabel,
    /// Any other name. Recognized as a directive, rendered as nothing.
    Unknown(String),
}

impl ChartKind {
    fn parse(name: &str) -> Self {
        match name {
            "deperditions" => Self::Losses,
            "classe" => Self::EnergyLabel,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// A parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDirective<'a> {
    pub kind: ChartKind,
    /// Raw JSON payload text.
    pub payload: &'a str,
}

impl<'a> ChartDirective<'a> {
    /// Parse a trimmed line. Returns `None` if it is not a chart directive.
    #[must_use]
    pub fn parse_line(line: &'a str) -> Option<Self> {
        let caps = DIRECTIVE_RE.captures(line)?;
        Some(Self {
            kind: ChartKind::parse(caps.get(1)?.as_str()),
            payload: caps.get(2)?.as_str(),
        })
    }

    /// Render the chart.
    ///
    /// Malformed JSON is skipped silently (logged at debug level) and yields
    /// an empty string, as do unknown kinds and unusable payloads.
    #[must_use]
    pub fn render(&self) -> String {
        let payload: Value = match serde_json::from_str(self.payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, payload = self.payload, "Skipping malformed chart directive");
                return String::new();
            }
        };
        match &self.kind {
            ChartKind::Losses => dpe_charts::loss_breakdown_chart(&payload),
            ChartKind::EnergyLabel => dpe_charts::energy_label_chart(&payload),
            ChartKind::Unknown(name) => {
                tracing::debug!(kind = %name, "Skipping unknown chart directive");
                String::new()
            }
        }
    }
}
