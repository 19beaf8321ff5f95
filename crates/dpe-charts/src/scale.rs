//! A–G class-scale indicator (the "energy label" ladder).

use std::fmt::Write;

use serde_json::Value;

use crate::consts::{FONT_FAMILY, INK, MUTED_INK};
use crate::grade::Grade;
use crate::svg::fmt_num;

/// Bar widths from `A` to `G`; each bar is wider than the one above.
const BAR_WIDTHS: [u32; 7] = [52, 62, 72, 82, 92, 102, 112];
const TIP: u32 = 14;
const BAR_HEIGHT: u32 = 22;
const GAP: u32 = 3;
const START_X: u32 = 22;
const START_Y: u32 = 28;

/// Title shown above the energy grade ladder.
pub const ENERGY_TITLE: &str = "CLASSE ÉNERGÉTIQUE";

/// Title shown above the emissions grade ladder.
pub const EMISSIONS_TITLE: &str = "CLASSE CLIMAT CO₂";

/// Render a seven-bar ladder with `grade` outlined and pointed at.
#[must_use]
pub fn grade_scale(grade: Grade, title: &str) -> String {
    let mut bars = String::new();

    for (i, (bar, width)) in Grade::ALL.iter().zip(BAR_WIDTHS).enumerate() {
        let y = bar_top(i);
        let active = *bar == grade;
        let points = format!(
            "{START_X},{y} {right},{y} {tip},{mid} {right},{bottom} {START_X},{bottom}",
            right = START_X + width,
            tip = START_X + width + TIP,
            mid = fmt_num(f64::from(y) + f64::from(BAR_HEIGHT) / 2.0),
            bottom = y + BAR_HEIGHT,
        );
        let (stroke, stroke_width) = if active { (INK, "2.5") } else { ("none", "0") };
        write!(
            bars,
            r#"<polygon data-grade="{letter}" points="{points}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linejoin="round"/>"#,
            letter = bar.letter(),
            fill = bar.color(),
        )
        .unwrap();
        write!(
            bars,
            r#"<text x="{}" y="{}" font-size="11" font-weight="700" fill="{}" font-family="{FONT_FAMILY}">{}</text>"#,
            START_X + 13,
            y + 15,
            bar.text_color(),
            bar.letter()
        )
        .unwrap();
    }

    let iy = bar_top(grade.index());
    let ix = START_X + BAR_WIDTHS[6] + TIP + 8;
    let mid = iy + BAR_HEIGHT / 2;
    write!(
        bars,
        r#"<polygon class="grade-pointer" points="{ix},{} {ix},{} {},{mid}" fill="{INK}"/>"#,
        mid - 7,
        mid + 7,
        ix - 9
    )
    .unwrap();
    write!(
        bars,
        r#"<text x="{}" y="{}" font-size="13" font-weight="700" fill="{INK}" font-family="{FONT_FAMILY}">{}</text>"#,
        ix + 4,
        iy + 15,
        grade.letter()
    )
    .unwrap();

    let width = START_X + BAR_WIDTHS[6] + TIP + 38;
    let height = bar_top(7) + 8;
    format!(
        r#"<svg viewBox="0 0 {width} {height}" width="{width}"><text x="{}" y="17" text-anchor="middle" font-size="9" font-weight="600" fill="{MUTED_INK}" font-family="{FONT_FAMILY}" letter-spacing="0.8">{title}</text>{bars}</svg>"#,
        fmt_num(f64::from(width) / 2.0)
    )
}

/// Render energy and emissions ladders side by side.
///
/// Either grade may be missing or invalid; that ladder is left out. When
/// neither is usable the result is empty.
#[must_use]
pub fn energy_label(energy: Option<&str>, emissions: Option<&str>) -> String {
    let energy = energy
        .and_then(Grade::parse)
        .map(|g| grade_scale(g, ENERGY_TITLE))
        .unwrap_or_default();
    let emissions = emissions
        .and_then(Grade::parse)
        .map(|g| grade_scale(g, EMISSIONS_TITLE))
        .unwrap_or_default();

    if energy.is_empty() && emissions.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="chart-wrap" style="display:flex;gap:24px;flex-wrap:wrap">{energy}{emissions}</div>"#
    )
}

/// Render the energy label for a `{"classe": "D", "classe_co2": "B"}` payload.
#[must_use]
pub fn energy_label_chart(payload: &Value) -> String {
    energy_label(
        payload.get("classe").and_then(Value::as_str),
        payload.get("classe_co2").and_then(Value::as_str),
    )
}

#[allow(clippy::cast_possible_truncation)]
fn bar_top(index: usize) -> u32 {
    START_Y + index as u32 * (BAR_HEIGHT + GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outlined_bars(svg: &str) -> Vec<&str> {
        svg.split("<polygon")
            .filter(|p| p.contains(r##"stroke="#1e293b""##))
            .collect()
    }

    #[test]
    fn test_exactly_one_bar_emphasized() {
        let svg = grade_scale(Grade::D, ENERGY_TITLE);
        let outlined = outlined_bars(&svg);
        assert_eq!(outlined.len(), 1);
        assert!(outlined[0].contains(r#"data-grade="D""#));
    }

    #[test]
    fn test_emphasized_bar_is_fourth_of_seven() {
        let svg = grade_scale(Grade::D, ENERGY_TITLE);
        assert_eq!(svg.matches("data-grade=").count(), 7);
        // Bar index 3 starts at y = 28 + 3 * 25
        assert!(outlined_bars(&svg)[0].contains(r#"points="22,103 104,103"#));
    }

    #[test]
    fn test_bars_widen_down_the_scale() {
        let svg = grade_scale(Grade::A, ENERGY_TITLE);
        assert!(svg.contains(r#"points="22,28 74,28 88,39"#));
        assert!(svg.contains(r#"points="22,178 134,178 148,189"#));
    }

    #[test]
    fn test_pointer_and_letter_beside_active_bar() {
        let svg = grade_scale(Grade::G, ENERGY_TITLE);
        // ix = 22 + 112 + 14 + 8 = 156, bar G at y = 178
        assert!(svg.contains(r#"points="156,182 156,196 147,189""#));
        assert!(svg.contains(r#"<text x="160" y="193""#));
    }

    #[test]
    fn test_dimensions() {
        let svg = grade_scale(Grade::C, EMISSIONS_TITLE);
        assert!(svg.starts_with(r#"<svg viewBox="0 0 186 211" width="186">"#));
        assert!(svg.contains(EMISSIONS_TITLE));
    }

    #[test]
    fn test_energy_label_both() {
        let html = energy_label(Some("d"), Some("B"));
        assert!(html.starts_with(r#"<div class="chart-wrap""#));
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains(ENERGY_TITLE));
        assert!(html.contains(EMISSIONS_TITLE));
    }

    #[test]
    fn test_energy_label_one_side() {
        let html = energy_label(None, Some("F"));
        assert_eq!(html.matches("<svg").count(), 1);
        assert!(!html.contains(ENERGY_TITLE));
    }

    #[test]
    fn test_energy_label_invalid_is_empty() {
        assert_eq!(energy_label(None, None), "");
        assert_eq!(energy_label(Some("H"), Some("")), "");
    }

    #[test]
    fn test_energy_label_chart_payload() {
        let html = energy_label_chart(&json!({"classe": "D", "classe_co2": "B"}));
        assert_eq!(html.matches("<svg").count(), 2);
        assert_eq!(energy_label_chart(&json!({"classe": 4})), "");
        assert_eq!(energy_label_chart(&json!(null)), "");
    }
}
