//! SVG geometry and number formatting helpers.

use std::f64::consts::PI;

/// Sweeps at or above this many degrees are drawn as a full circle.
const FULL_CIRCLE_THRESHOLD: f64 = 359.9;

/// Format a coordinate for an SVG attribute.
///
/// Rounds to two decimals and drops trailing zeros, so `105.0` becomes `105`
/// and `39.999_999` becomes `40`.
#[must_use]
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let formatted = format!("{rounded:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Point on a circle, with 0° at twelve o'clock and angles growing clockwise.
#[must_use]
pub(crate) fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Path data for a pie wedge between two angles.
///
/// A single arc command cannot describe a full circle (start and end points
/// coincide), so a near-360° sweep is emitted as two half-circle arcs.
#[must_use]
pub(crate) fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    if end - start >= FULL_CIRCLE_THRESHOLD {
        let left = fmt_num(cx - r);
        let right = fmt_num(cx + r);
        let cy = fmt_num(cy);
        let r = fmt_num(r);
        return format!(
            "M {left} {cy} A {r} {r} 0 1 1 {right} {cy} A {r} {r} 0 1 1 {left} {cy}"
        );
    }

    let (sx, sy) = polar_to_cartesian(cx, cy, r, start);
    let (ex, ey) = polar_to_cartesian(cx, cy, r, end);
    let large_arc = u8::from(end - start > 180.0);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(sx),
        fmt_num(sy),
        fmt_num(ex),
        fmt_num(ey),
        r = fmt_num(r),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fmt_num_integers() {
        assert_eq!(fmt_num(105.0), "105");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.000_1), "0");
    }

    #[test]
    fn test_fmt_num_fractions() {
        assert_eq!(fmt_num(100.5), "100.5");
        assert_eq!(fmt_num(39.999_999), "40");
        assert_eq!(fmt_num(12.3456), "12.35");
    }

    #[test]
    fn test_polar_top_of_circle() {
        let (x, y) = polar_to_cartesian(105.0, 105.0, 85.0, 0.0);
        assert!((x - 105.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_quarter_turn_is_right() {
        let (x, y) = polar_to_cartesian(105.0, 105.0, 85.0, 90.0);
        assert!((x - 190.0).abs() < 1e-9);
        assert!((y - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_circle_uses_two_arcs() {
        let path = pie_slice_path(105.0, 105.0, 85.0, 0.0, 360.0);
        assert_eq!(
            path,
            "M 20 105 A 85 85 0 1 1 190 105 A 85 85 0 1 1 20 105"
        );
    }

    #[test]
    fn test_near_full_circle_uses_two_arcs() {
        let path = pie_slice_path(105.0, 105.0, 85.0, 0.0, 359.95);
        assert_eq!(path.matches(" A ").count(), 2);
        assert!(!path.contains('L'));
    }

    #[test]
    fn test_half_circle_wedge() {
        let path = pie_slice_path(105.0, 105.0, 85.0, 0.0, 180.0);
        assert_eq!(path, "M 105 105 L 105 20 A 85 85 0 0 1 105 190 Z");
    }

    #[test]
    fn test_large_arc_flag() {
        let path = pie_slice_path(105.0, 105.0, 85.0, 0.0, 240.0);
        assert!(path.contains(" 0 1 1 "));
        let path = pie_slice_path(105.0, 105.0, 85.0, 240.0, 360.0);
        assert!(path.contains(" 0 0 1 "));
    }
}
