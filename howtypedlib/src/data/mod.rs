//! Data collection: classify files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading source
//! files and turning them into TypeScript adoption statistics. It provides:
//!
//! - **Line counting**: logical lines, skipping blanks and comments
//! - **Vue matching**: script block language and body of single-file components
//! - **Statistics**: the `Counts` tree and its building blocks
//! - **Counting**: directory walk (`count_directory`, `analyze`)
//! - **Scores**: percentage and weighted score derivation
//!
//! ## Example
//!
//! ```rust,ignore
//! use howtypedlib::data::{analyze, CountOptions};
//!
//! let counts = analyze(".", &CountOptions::new())?;
//! println!("TypeScript score: {}", counts.score);
//! ```

pub mod counter;
pub mod lines;
pub mod scores;
pub mod stats;
pub mod vue;

pub use counter::{
    accumulate_file, accumulate_source, analyze, count_directory, CountOptions,
    FileKind,
};
pub use lines::count_logical_lines;
pub use scores::{
    calculate_percentage, calculate_score, derive_scores_and_percentages, totals_for_language,
    FILE_WEIGHTING, LOC_WEIGHTING,
};
pub use stats::{
    Category, Counts, FileStatistics, FileType, Language, LanguageDistributionPercentages,
    LanguageSplit,
};
pub use vue::{detect_script_kind, extract_script_block};
