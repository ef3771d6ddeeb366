//! Percentage and score derivation.
//!
//! Runs once, after the walk has finished accumulating counts. Everything
//! here is a pure function of the accumulated file and line counts, so
//! deriving twice gives the same result as deriving once.
//!
//! Rounding is half-up to two decimal places, computed on integer
//! hundredths rather than on `f64` products.

use super::stats::{
    Category, Counts, FileStatistics, Language, LanguageDistributionPercentages, LanguageSplit,
};

// Score weights in tenths, for exact integer arithmetic.
const FILE_WEIGHT_TENTHS: u64 = 3;
const LOC_WEIGHT_TENTHS: u64 = 7;

/// Weight of the file-count percentage in the score (0.3).
pub const FILE_WEIGHTING: f64 = FILE_WEIGHT_TENTHS as f64 / 10.0;
/// Weight of the line-count percentage in the score (0.7).
pub const LOC_WEIGHTING: f64 = LOC_WEIGHT_TENTHS as f64 / 10.0;

/// Integer division rounding half-up.
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Convert a two-decimal percentage to whole hundredths.
fn to_hundredths(percentage: f64) -> u64 {
    if percentage.is_finite() && percentage > 0.0 {
        (percentage * 100.0).round() as u64
    } else {
        0
    }
}

/// `value / total * 100`, rounded half-up to two decimal places.
///
/// Returns 0 when `total` is 0.
pub fn calculate_percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let hundredths = div_round_half_up(value * 10_000, total);
    hundredths as f64 / 100.0
}

/// Weighted blend of the TypeScript file and line percentages, rounded
/// half-up to two decimal places.
pub fn calculate_score(files_percentage: f64, loc_percentage: f64) -> f64 {
    let weighted = to_hundredths(files_percentage) * FILE_WEIGHT_TENTHS
        + to_hundredths(loc_percentage) * LOC_WEIGHT_TENTHS;
    div_round_half_up(weighted, 10) as f64 / 100.0
}

/// Sum a language's statistics across every category.
pub fn totals_for_language(counts: &Counts, language: Language) -> FileStatistics {
    counts
        .filetypes
        .values()
        .map(|category| category.language(language))
        .fold(FileStatistics::default(), |acc, stats| acc + stats)
}

fn split(ts: u64, js: u64, total: u64) -> LanguageSplit {
    LanguageSplit {
        ts: calculate_percentage(ts, total),
        js: calculate_percentage(js, total),
    }
}

fn derive_category(category: &mut Category) {
    if category.total.files == 0 {
        return;
    }

    category.percentages.files = split(category.ts.files, category.js.files, category.total.files);

    if category.total.loc > 0 {
        category.percentages.loc = split(category.ts.loc, category.js.loc, category.total.loc);
    }

    category.score = calculate_score(category.percentages.files.ts, category.percentages.loc.ts);
}

/// Fill in percentages and scores for every category and for the root.
///
/// Categories without files keep all-zero percentages and score.
pub fn derive_scores_and_percentages(counts: &mut Counts) {
    for category in counts.filetypes.values_mut() {
        derive_category(category);
    }

    let ts = totals_for_language(counts, Language::Ts);
    let js = totals_for_language(counts, Language::Js);

    counts.percentages = LanguageDistributionPercentages {
        files: split(ts.files, js.files, counts.total.files),
        loc: split(ts.loc, js.loc, counts.total.loc),
    };
    counts.score = calculate_score(counts.percentages.files.ts, counts.percentages.loc.ts);
}

impl Counts {
    /// Consume the tree and return it with percentages and scores derived.
    pub fn with_scores(mut self) -> Self {
        derive_scores_and_percentages(&mut self);
        self
    }
}
