//! Theme colors and their derived tints.

use dpe_render::{ColorError, Rgb};

/// Report palette: two configured colors and three tints of the primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    /// Primary blended 30% toward white.
    pub light: String,
    /// Primary blended 85% toward white.
    pub very_light: String,
    /// Primary blended 95% toward white.
    pub faint: String,
}

impl ThemeColors {
    /// Build a palette from two `#RRGGBB` colors.
    pub fn new(primary: &str, secondary: &str) -> Result<Self, ColorError> {
        let base = Rgb::from_hex(primary)?;
        let secondary = Rgb::from_hex(secondary)?;
        Ok(Self {
            primary: base.to_hex(),
            secondary: secondary.to_hex(),
            light: base.lighten(0.3).to_hex(),
            very_light: base.lighten(0.85).to_hex(),
            faint: base.lighten(0.95).to_hex(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#5590ee".to_owned(),
            secondary: "#3b7dd8".to_owned(),
            light: "#88b1f3".to_owned(),
            very_light: "#e6eefc".to_owned(),
            faint: "#f7f9fe".to_owned(),
        }
    }
}
