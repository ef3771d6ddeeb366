//! Core data structures for TypeScript adoption statistics.
//!
//! The report is a small tree:
//!
//! - [`Counts`] is the root. It holds one [`Category`] per [`FileType`] plus
//!   overall totals, percentages and score.
//! - Each [`Category`] splits its files into JavaScript and TypeScript
//!   [`FileStatistics`].
//!
//! File and line counts are accumulated during the directory walk. The
//! percentages and scores are derived afterwards in a single pass (see
//! [`crate::data::scores`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

/// The two languages being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Js,
    Ts,
}

/// Structural grouping of source files.
///
/// Serialized in lowercase, so it doubles as the JSON key under `filetypes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Plain `.js`/`.ts` family files
    Plain,
    /// Vue single-file components
    Vue,
}

impl FileType {
    /// All categories, in report order.
    pub const ALL: [FileType; 2] = [FileType::Plain, FileType::Vue];

    /// Human-readable label shown in the report.
    pub fn label(self) -> &'static str {
        match self {
            FileType::Plain => "Plain JS/TS",
            FileType::Vue => "Vue SFC",
        }
    }
}

/// File and logical line counts for one language within one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatistics {
    /// Number of files
    pub files: u64,
    /// Logical lines of code
    pub loc: u64,
}

impl FileStatistics {
    pub fn new(files: u64, loc: u64) -> Self {
        Self { files, loc }
    }

    /// Record one file with `loc` logical lines.
    pub fn record(&mut self, loc: u64) {
        self.files += 1;
        self.loc += loc;
    }
}

impl Add for FileStatistics {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            loc: self.loc + other.loc,
        }
    }
}

impl AddAssign for FileStatistics {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.loc += other.loc;
    }
}

/// A pair of TypeScript/JavaScript percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSplit {
    pub ts: f64,
    pub js: f64,
}

/// Share of TypeScript vs JavaScript, by file count and by lines.
///
/// Derived from the accumulated counts; never mutated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageDistributionPercentages {
    pub files: LanguageSplit,
    pub loc: LanguageSplit,
}

/// Statistics for one [`FileType`].
///
/// `total` always equals `js + ts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub js: FileStatistics,
    pub ts: FileStatistics,
    pub total: FileStatistics,
    pub percentages: LanguageDistributionPercentages,
    pub score: f64,
}

impl Category {
    /// Create an empty category for the given file type.
    pub fn new(file_type: FileType) -> Self {
        Self {
            label: file_type.label().to_string(),
            js: FileStatistics::default(),
            ts: FileStatistics::default(),
            total: FileStatistics::default(),
            percentages: LanguageDistributionPercentages::default(),
            score: 0.0,
        }
    }

    /// Statistics for a single language.
    pub fn language(&self, language: Language) -> FileStatistics {
        match language {
            Language::Js => self.js,
            Language::Ts => self.ts,
        }
    }

    /// Record one file of `language` with `loc` logical lines.
    pub fn record(&mut self, language: Language, loc: u64) {
        match language {
            Language::Js => self.js.record(loc),
            Language::Ts => self.ts.record(loc),
        }
        self.total.record(loc);
    }

    /// Whether any file has been counted in this category.
    pub fn is_empty(&self) -> bool {
        self.total.files == 0
    }
}

/// Root of the statistics tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counts {
    /// Per-category statistics, keyed by file type
    pub filetypes: BTreeMap<FileType, Category>,
    /// Totals across all categories
    pub total: FileStatistics,
    /// Overall TypeScript/JavaScript split
    pub percentages: LanguageDistributionPercentages,
    /// Overall weighted TypeScript score (0-100)
    pub score: f64,
}

impl Default for Counts {
    fn default() -> Self {
        Self::new()
    }
}

impl Counts {
    /// Create an empty tree with every category present and zeroed.
    pub fn new() -> Self {
        let filetypes = FileType::ALL
            .into_iter()
            .map(|file_type| (file_type, Category::new(file_type)))
            .collect();

        Self {
            filetypes,
            total: FileStatistics::default(),
            percentages: LanguageDistributionPercentages::default(),
            score: 0.0,
        }
    }

    /// Borrow a category.
    ///
    /// Every [`FileType`] is present for trees built with [`Counts::new`];
    /// a missing one (e.g. from hand-edited JSON) reads as empty.
    pub fn category(&self, file_type: FileType) -> Option<&Category> {
        self.filetypes.get(&file_type)
    }

    /// Record one file in a category and in the overall totals.
    pub fn record(&mut self, file_type: FileType, language: Language, loc: u64) {
        self.filetypes
            .entry(file_type)
            .or_insert_with(|| Category::new(file_type))
            .record(language, loc);
        self.total.record(loc);
    }

    /// Whether no file was counted at all.
    pub fn is_empty(&self) -> bool {
        self.total.files == 0
    }

    /// Pointwise sum of every counter in `other` into `self`.
    ///
    /// Derived percentages and scores are left alone; run the derive pass
    /// again after merging.
    pub fn merge(&mut self, other: &Counts) {
        for (file_type, theirs) in &other.filetypes {
            let ours = self
                .filetypes
                .entry(*file_type)
                .or_insert_with(|| Category::new(*file_type));
            ours.js += theirs.js;
            ours.ts += theirs.ts;
            ours.total += theirs.total;
        }
        self.total += other.total;
    }
}
