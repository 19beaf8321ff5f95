//! Before/after grade comparison.

use crate::consts::{FONT_FAMILY, IMPROVEMENT_COLOR, INK, MUTED_INK};
use crate::grade::Grade;

const BAR_HEIGHT: u32 = 32;
const GAP: u32 = 16;
const START_X: u32 = 120;
const BAR_WIDTH: u32 = 200;
const FIRST_ROW: u32 = 40;

/// Render two stacked bars for the current and post-works grades.
///
/// An improvement marker is drawn only when `after` is strictly better than
/// `before`.
#[must_use]
pub fn grade_comparison(before: Grade, after: Grade) -> String {
    let y1 = FIRST_ROW;
    let y2 = y1 + BAR_HEIGHT + GAP;
    let width = START_X + BAR_WIDTH + 60;
    let height = y2 + BAR_HEIGHT + 20;

    let improvement = if after.is_better_than(before) {
        let x = START_X + BAR_WIDTH;
        let mid = y2 + BAR_HEIGHT / 2;
        format!(
            r#"<polygon class="improvement" points="{},{} {},{} {},{mid}" fill="{IMPROVEMENT_COLOR}"/>"#,
            x + 4,
            mid - 6,
            x + 4,
            mid + 6,
            x - 2
        )
    } else {
        String::new()
    };

    format!(
        concat!(
            r#"<div class="chart-compare">"#,
            r#"<svg viewBox="0 0 {width} {height}" width="100%" style="max-width:450px">"#,
            r#"<text x="20" y="20" font-size="13" font-weight="700" fill="{ink}" font-family="{font}">Avant / Après travaux</text>"#,
            "{before_row}{after_row}{improvement}",
            "</svg></div>"
        ),
        width = width,
        height = height,
        ink = INK,
        font = FONT_FAMILY,
        before_row = grade_row("Actuelle", before, y1),
        after_row = grade_row("Après", after, y2),
        improvement = improvement,
    )
}

/// Render the comparison from two grade letters.
///
/// Returns an empty string when either letter is not a valid grade.
#[must_use]
pub fn before_after_chart(before: &str, after: &str) -> String {
    match (Grade::parse(before), Grade::parse(after)) {
        (Some(before), Some(after)) => grade_comparison(before, after),
        _ => String::new(),
    }
}

fn grade_row(label: &str, grade: Grade, y: u32) -> String {
    let color = grade.color();
    let letter = grade.letter();
    let text_y = y + 20;
    format!(
        concat!(
            r#"<text x="20" y="{text_y}" font-size="12" fill="{muted}" font-family="{font}">{label}</text>"#,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{color}" rx="6"/>"#,
            r#"<text x="{value_x}" y="{text_y}" font-size="16" font-weight="700" fill="{color}" font-family="{font}">Classe {letter}</text>"#
        ),
        text_y = text_y,
        muted = MUTED_INK,
        font = FONT_FAMILY,
        label = label,
        x = START_X,
        y = y,
        w = BAR_WIDTH,
        h = BAR_HEIGHT,
        color = color,
        value_x = START_X + BAR_WIDTH + 12,
        letter = letter,
    )
}
