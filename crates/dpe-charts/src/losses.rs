//! Proportional heat-loss breakdown (pie chart with legend).
//!
//! Wedge sweeps use each weight's share of the filtered total, while the
//! legend prints the supplied weight itself followed by `%`. Payloads are
//! expected to already carry percentages; the two only agree when the weights
//! sum to 100.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::category::LossCategory;
use crate::consts::{FONT_FAMILY, INK, LEGEND_INK};
use crate::svg::{fmt_num, pie_slice_path};

const CENTER: f64 = 105.0;
const RADIUS: f64 = 85.0;
const LEGEND_TOP: u32 = 28;
const LEGEND_ROW: u32 = 38;
const MIN_HEIGHT: u32 = 210;
const WIDTH: u32 = 430;

/// Leading decimal number of a string value (`"30 %"` → `30`).
static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// One wedge of the chart, angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct LossSlice {
    pub category: LossCategory,
    pub weight: f64,
    pub start: f64,
    pub sweep: f64,
}

/// Filtered, ordered loss weights ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossBreakdown {
    entries: Vec<(LossCategory, f64)>,
}

impl LossBreakdown {
    /// Build from `(key, weight)` pairs in display order.
    ///
    /// Unknown keys and non-positive or non-finite weights are dropped.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(key, weight)| {
                let category = LossCategory::parse(key);
                if category.is_none() {
                    tracing::debug!(key, "Dropping unknown loss category");
                }
                category.map(|c| (c, weight))
            })
            .filter(|(_, weight)| weight.is_finite() && *weight > 0.0)
            .collect();
        Self { entries }
    }

    /// Build from a JSON object payload such as `{"murs": 30, "toiture": "20%"}`.
    ///
    /// Numeric strings are read up to the first non-numeric character. Any
    /// non-object payload yields an empty breakdown.
    #[must_use]
    pub fn from_json(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::default();
        };
        Self::from_entries(
            object
                .iter()
                .map(|(key, value)| (key.as_str(), weight_of(value))),
        )
    }

    /// Whether no known category survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the retained weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Lay out wedges sequentially from 0°.
    #[must_use]
    pub fn slices(&self) -> Vec<LossSlice> {
        let total = self.total();
        let mut angle = 0.0;
        self.entries
            .iter()
            .map(|&(category, weight)| {
                let sweep = weight / total * 360.0;
                let slice = LossSlice {
                    category,
                    weight,
                    start: angle,
                    sweep,
                };
                angle += sweep;
                slice
            })
            .collect()
    }

    /// Render the chart, or an empty string when there is nothing to draw.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut wedges = String::new();
        let mut legend = String::new();
        let mut ly = LEGEND_TOP;

        for slice in self.slices() {
            let color = slice.category.color();
            let path = pie_slice_path(
                CENTER,
                CENTER,
                RADIUS,
                slice.start,
                slice.start + slice.sweep,
            );
            write!(
                wedges,
                r##"<path d="{path}" fill="{color}" stroke="#fff" stroke-width="2"/>"##
            )
            .unwrap();
            write!(
                legend,
                r#"<circle cx="228" cy="{}" r="7" fill="{color}"/>"#,
                ly + 6
            )
            .unwrap();
            write!(
                legend,
                r#"<text x="242" y="{}" font-size="12" fill="{LEGEND_INK}" font-family="{FONT_FAMILY}">{}</text>"#,
                ly + 10,
                slice.category.label()
            )
            .unwrap();
            write!(
                legend,
                r#"<text x="242" y="{}" font-size="11" font-weight="600" fill="{INK}" font-family="{FONT_FAMILY}">{}%</text>"#,
                ly + 25,
                fmt_num(slice.weight.round())
            )
            .unwrap();
            ly += LEGEND_ROW;
        }

        let height = MIN_HEIGHT.max(ly + 15);
        format!(
            r#"<div class="chart-wrap"><svg viewBox="0 0 {WIDTH} {height}" width="100%" style="max-width:{WIDTH}px">{wedges}{legend}</svg></div>"#
        )
    }
}

/// Render the loss breakdown chart for a directive payload.
#[must_use]
pub fn loss_breakdown_chart(payload: &Value) -> String {
    LossBreakdown::from_json(payload).render()
}

fn weight_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => LEADING_NUMBER_RE
            .find(s.trim_start())
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
