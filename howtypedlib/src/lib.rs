//! # howtypedlib
//!
//! Measures how much of a JavaScript codebase has moved to TypeScript.
//!
//! ## Overview
//!
//! The library walks a project directory and sorts source files into two
//! categories:
//!
//! - **Plain JS/TS**: `.js`, `.mjs`, `.cjs`, `.jsx` vs `.ts`, `.tsx`
//! - **Vue SFC**: `.vue` components, by the `lang` of their `<script>` block
//!
//! For each category it counts files and logical lines of code (blank and
//! comment lines excluded), then derives the TypeScript share of both and a
//! weighted score (30% files, 70% lines).
//!
//! The pipeline has three stages:
//!
//! 1. **Source** ([`source`]): ignore patterns and project metadata
//! 2. **Data** ([`data`]): directory walk, line counting, score derivation
//! 3. **Rating** ([`rating`]): map percentages to human-readable buckets
//!
//! Everything returns structured data; nothing is printed.
//!
//! ## Example
//!
//! ```rust
//! use howtypedlib::{analyze, rating_for, CountOptions, FileType, IgnorePatterns};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/main.ts"), "const a: number = 1\n").unwrap();
//! fs::write(
//!     dir.path().join("src/App.vue"),
//!     "<template><p/></template>\n<script>\nexport default {}\n</script>\n",
//! )
//! .unwrap();
//!
//! let options = CountOptions::new().ignore(IgnorePatterns::resolve(dir.path()));
//! let counts = analyze(dir.path(), &options).unwrap();
//!
//! assert_eq!(counts.total.files, 2);
//! assert_eq!(counts.category(FileType::Vue).unwrap().js.files, 1);
//! assert_eq!(rating_for(counts.percentages.files.ts).label, "Fair");
//! ```

pub mod data;
pub mod error;
pub mod rating;
pub mod source;

pub use data::{
    accumulate_file, accumulate_source, analyze, calculate_percentage, calculate_score,
    count_directory, count_logical_lines, derive_scores_and_percentages,
    detect_script_kind, extract_script_block, totals_for_language, Category, CountOptions, Counts,
    FileKind, FileStatistics, FileType, Language, LanguageDistributionPercentages, LanguageSplit,
    FILE_WEIGHTING, LOC_WEIGHTING,
};
pub use error::HowTypedError;
pub use rating::{rating_for, Rating, NO_RATING, RATINGS};
pub use source::{package_name, IgnorePatterns, DEFAULT_IGNORE_PATTERNS};

/// Result type for howtypedlib operations
pub type Result<T> = std::result::Result<T, HowTypedError>;
