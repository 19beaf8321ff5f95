//! Internal constants shared by the chart generators.

/// Font stack used by every text element in generated SVG.
pub const FONT_FAMILY: &str = "-apple-system,sans-serif";

/// Dark ink used for outlines, pointers and emphasized labels.
pub const INK: &str = "#1e293b";

/// Muted ink for secondary labels.
pub const MUTED_INK: &str = "#64748b";

/// Legend label color.
pub const LEGEND_INK: &str = "#475569";

/// Fill of the improvement marker in before/after charts.
pub const IMPROVEMENT_COLOR: &str = "#10b981";

/// Official A–G energy label fill colors, best grade first.
pub const GRADE_COLORS: [&str; 7] = [
    "#319834", "#34a13c", "#c9d200", "#f9ef09", "#f5b50a", "#f36c23", "#e2001a",
];

/// Text colors readable on top of [`GRADE_COLORS`].
pub const GRADE_TEXT_COLORS: [&str; 7] = ["#fff", "#fff", "#333", "#333", "#333", "#fff", "#fff"];
