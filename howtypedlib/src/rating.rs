//! Rating buckets for percentages and scores.
//!
//! A small static table, ordered by descending threshold. A value gets the
//! first rating whose threshold it meets.

/// A human-readable bucket for a percentage or score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Lowest value (inclusive) that earns this rating
    pub threshold: f64,
    pub label: &'static str,
    pub emoji: &'static str,
    /// Foreground colour, as a 256-colour palette index
    pub fg: u8,
    /// Background colour, as a 256-colour palette index
    pub bg: u8,
}

pub const EXCELLENT: Rating = Rating {
    threshold: 90.0,
    label: "Excellent",
    emoji: "🚀",
    fg: 46,
    bg: 22,
};

pub const GREAT: Rating = Rating {
    threshold: 75.0,
    label: "Great",
    emoji: "🎉",
    fg: 154,
    bg: 58,
};

pub const GOOD: Rating = Rating {
    threshold: 60.0,
    label: "Good",
    emoji: "👍",
    fg: 226,
    bg: 58,
};

pub const FAIR: Rating = Rating {
    threshold: 50.0,
    label: "Fair",
    emoji: "🤝",
    fg: 214,
    bg: 94,
};

pub const NEEDS_IMPROVEMENT: Rating = Rating {
    threshold: 30.0,
    label: "Needs Improvement",
    emoji: "😕",
    fg: 202,
    bg: 52,
};

pub const POOR: Rating = Rating {
    threshold: 0.0,
    label: "Poor",
    emoji: "😞",
    fg: 196,
    bg: 52,
};

/// Fallback for values below every threshold.
pub static NO_RATING: Rating = Rating {
    threshold: -1.0,
    label: "No Rating",
    emoji: "🤷",
    fg: 231,
    bg: 16,
};

/// All real ratings, highest threshold first.
pub static RATINGS: [Rating; 6] = [EXCELLENT, GREAT, GOOD, FAIR, NEEDS_IMPROVEMENT, POOR];

/// Rating for a percentage or score.
pub fn rating_for(value: f64) -> &'static Rating {
    RATINGS
        .iter()
        .find(|rating| value >= rating.threshold)
        .unwrap_or(&NO_RATING)
}
