//! Heat-loss categories shown in the loss breakdown chart.

/// One of the six known heat-loss categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCategory {
    Walls,
    Roof,
    Joinery,
    Floors,
    ThermalBridges,
    Other,
}

impl LossCategory {
    /// Parse a payload key.
    ///
    /// Keys are case-folded and spaces/hyphens become underscores before
    /// matching, so `"Ponts thermiques"` and `"ponts-thermiques"` both map to
    /// [`ThermalBridges`](Self::ThermalBridges).
    ///
    /// Returns `None` for keys outside the known set.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match normalize_key(key).as_str() {
            "murs" => Some(Self::Walls),
            "toiture" => Some(Self::Roof),
            "menuiseries" => Some(Self::Joinery),
            "planchers" => Some(Self::Floors),
            "ponts_thermiques" => Some(Self::ThermalBridges),
            "autres" => Some(Self::Other),
            _ => None,
        }
    }

    /// Payload key for this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Walls => "murs",
            Self::Roof => "toiture",
            Self::Joinery => "menuiseries",
            Self::Floors => "planchers",
            Self::ThermalBridges => "ponts_thermiques",
            Self::Other => "autres",
        }
    }

    /// Legend label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Walls => "Murs / Façades",
            Self::Roof => "Toiture / Combles",
            Self::Joinery => "Menuiseries",
            Self::Floors => "Planchers",
            Self::ThermalBridges => "Ponts thermiques",
            Self::Other => "Autres",
        }
    }

    /// Wedge and legend marker color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Walls => "#5590ee",
            Self::Roof => "#f59e0b",
            Self::Joinery => "#10b981",
            Self::Floors => "#ef4444",
            Self::ThermalBridges => "#8b5cf6",
            Self::Other => "#94a3b8",
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect()
}
