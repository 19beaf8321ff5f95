//! Ordinal energy/emissions grades.
//!
//! Grades run from `A` (best) to `G` (worst). The ordering of the enum is the
//! ordering of the scale, so `Grade::A < Grade::G`.

use crate::consts::{GRADE_COLORS, GRADE_TEXT_COLORS};

/// A single letter grade on the A–G scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Parse a grade letter, case-insensitively.
    ///
    /// The input must be exactly one letter; surrounding whitespace is not
    /// accepted. Returns `None` for anything outside A–G.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    /// Zero-based position on the scale (`A` = 0, `G` = 6).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Uppercase letter for display.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }

    /// Label fill color.
    #[must_use]
    pub fn color(self) -> &'static str {
        GRADE_COLORS[self.index()]
    }

    /// Text color readable on top of [`color`](Self::color).
    #[must_use]
    pub fn text_color(self) -> &'static str {
        GRADE_TEXT_COLORS[self.index()]
    }

    /// Whether `self` sits strictly higher on the scale than `other`.
    #[must_use]
    pub fn is_better_than(self, other: Self) -> bool {
        self < other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Grade::parse("d"), Some(Grade::D));
        assert_eq!(Grade::parse("D"), Some(Grade::D));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Grade::parse("H"), None);
        assert_eq!(Grade::parse(""), None);
        assert_eq!(Grade::parse("AB"), None);
        assert_eq!(Grade::parse(" A"), None);
    }

    #[test]
    fn test_index_and_letter() {
        assert_eq!(Grade::A.index(), 0);
        assert_eq!(Grade::D.index(), 3);
        assert_eq!(Grade::G.index(), 6);
        assert_eq!(Grade::F.letter(), 'F');
    }

    #[test]
    fn test_is_better_than() {
        assert!(Grade::B.is_better_than(Grade::D));
        assert!(!Grade::D.is_better_than(Grade::B));
        assert!(!Grade::D.is_better_than(Grade::D));
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Grade::A.color(), "#319834");
        assert_eq!(Grade::G.color(), "#e2001a");
        assert_eq!(Grade::C.text_color(), "#333");
    }
}
