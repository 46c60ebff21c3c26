//! Match score presentation rules.
//!
//! Thresholds and palettes are presentation constants carried over verbatim
//! from the page design; do not re-derive them.

/// Discrete visual tier of a match score circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreTier::Excellent
        } else if score >= 70.0 {
            ScoreTier::Good
        } else if score >= 50.0 {
            ScoreTier::Moderate
        } else {
            ScoreTier::Poor
        }
    }

    /// Value of the `data-score` attribute set on the circle.
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Moderate => "moderate",
            ScoreTier::Poor => "poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "#4CAF50",
            ScoreTier::Good => "#2196F3",
            ScoreTier::Moderate => "#FF9800",
            ScoreTier::Poor => "#F44336",
        }
    }
}

/// Tier for the displayed text of a score circle. A trailing percent sign
/// is tolerated; otherwise unparsable text lands in `Poor`, matching how a
/// NaN score falls through every threshold.
pub fn tier_for_text(text: &str) -> ScoreTier {
    let text = text.trim();
    let text = text.strip_suffix('%').map(str::trim_end).unwrap_or(text);
    text.parse::<f64>()
        .map(ScoreTier::from_score)
        .unwrap_or(ScoreTier::Poor)
}

/// Palette cycled over the component score bars by position.
pub const BAR_PALETTE: [&str; 5] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#E91E63"];

pub fn bar_color(index: usize) -> &'static str {
    BAR_PALETTE[index % BAR_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_match_thresholds() {
        assert_eq!(tier_for_text("92"), ScoreTier::Excellent);
        assert_eq!(tier_for_text("71"), ScoreTier::Good);
        assert_eq!(tier_for_text("55"), ScoreTier::Moderate);
        assert_eq!(tier_for_text("10"), ScoreTier::Poor);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(ScoreTier::from_score(85.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(84.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(70.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(69.9), ScoreTier::Moderate);
        assert_eq!(ScoreTier::from_score(50.0), ScoreTier::Moderate);
        assert_eq!(ScoreTier::from_score(49.9), ScoreTier::Poor);
    }

    #[test]
    fn percent_suffix_is_tolerated() {
        assert_eq!(tier_for_text("92%"), ScoreTier::Excellent);
        assert_eq!(tier_for_text(" 55 % "), ScoreTier::Moderate);
    }

    #[test]
    fn unparsable_text_is_poor() {
        assert_eq!(tier_for_text(""), ScoreTier::Poor);
        assert_eq!(tier_for_text("%"), ScoreTier::Poor);
        assert_eq!(tier_for_text("n/a"), ScoreTier::Poor);
    }

    #[test]
    fn tier_labels_and_colors_are_fixed() {
        assert_eq!(ScoreTier::Excellent.label(), "excellent");
        assert_eq!(ScoreTier::Excellent.color(), "#4CAF50");
        assert_eq!(ScoreTier::Poor.label(), "poor");
        assert_eq!(ScoreTier::Poor.color(), "#F44336");
    }

    #[test]
    fn bar_palette_cycles_by_position() {
        assert_eq!(bar_color(0), "#4CAF50");
        assert_eq!(bar_color(4), "#E91E63");
        assert_eq!(bar_color(5), "#4CAF50");
        assert_eq!(bar_color(11), "#2196F3");
    }
}
