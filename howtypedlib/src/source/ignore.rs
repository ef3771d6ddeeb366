//! Ignore patterns: which paths the directory walk skips.
//!
//! Patterns start from a fixed set of defaults and are extended with the
//! lines of the project's `.gitignore`, if there is one. They are matched
//! against paths relative to the scan root, using `/` as the separator.
//!
//! Matching rules on top of plain glob syntax:
//!
//! - `*` never crosses a `/`
//! - `**/name` also matches `name` at the scan root
//! - a pattern without an interior `/` (e.g. `coverage/`, `*.log`) matches
//!   the name at any depth
//! - a leading `/` anchors the pattern to the scan root
//! - a trailing `/` is dropped

use std::fs;
use std::path::{Component, Path};

use glob::{MatchOptions, Pattern, PatternError};
use log::{debug, warn};

use crate::error::HowTypedError;
use crate::Result;

/// Patterns that are always ignored.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 4] =
    ["**/node_modules", "**/dist", "**/build", "**/.*"];

/// Name of the ignore file read from the scan root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One user-visible pattern and the globs it expands to.
#[derive(Debug, Clone)]
struct IgnoreRule {
    raw: String,
    globs: Vec<Pattern>,
}

impl IgnoreRule {
    fn compile(raw: &str) -> std::result::Result<Self, PatternError> {
        let mut body = raw;
        let anchored = body.starts_with('/');
        if anchored {
            body = body.trim_start_matches('/');
        }
        body = body.trim_end_matches('/');

        let mut sources = Vec::new();
        if !body.is_empty() {
            sources.push(body.to_string());
            if let Some(rest) = body.strip_prefix("**/") {
                sources.push(rest.to_string());
            } else if !anchored && !body.contains('/') {
                sources.push(format!("**/{body}"));
            }
        }

        let globs = sources
            .iter()
            .map(|source| Pattern::new(source))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            globs,
        })
    }

    fn matches(&self, path: &str) -> bool {
        self.globs
            .iter()
            .any(|glob| glob.matches_with(path, MATCH_OPTIONS))
    }
}

/// Ordered list of ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    rules: Vec<IgnoreRule>,
}

impl IgnorePatterns {
    /// Create an empty pattern list (nothing is ignored).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults only.
    pub fn defaults() -> Self {
        let mut patterns = Self::new();
        for pattern in DEFAULT_IGNORE_PATTERNS {
            patterns.push_lenient(pattern);
        }
        patterns
    }

    /// Defaults plus the `.gitignore` at `dir`, if present.
    ///
    /// A missing or unreadable ignore file is not an error.
    pub fn resolve(dir: impl AsRef<Path>) -> Self {
        let mut patterns = Self::defaults();
        let ignore_file = dir.as_ref().join(IGNORE_FILE_NAME);

        match fs::read_to_string(&ignore_file) {
            Ok(content) => patterns.extend_from_ignore_file(&content),
            Err(e) => debug!("no ignore file at {}: {e}", ignore_file.display()),
        }

        patterns
    }

    /// Add a pattern.
    pub fn add(mut self, pattern: &str) -> Result<Self> {
        let rule = IgnoreRule::compile(pattern).map_err(|e| HowTypedError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add multiple patterns.
    pub fn add_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.add(pattern)?;
        }
        Ok(self)
    }

    /// Append every usable line of an ignore file.
    ///
    /// Lines are trimmed; blank lines and `#` comments are dropped. A line
    /// that is not a valid glob is skipped with a warning.
    pub fn extend_from_ignore_file(&mut self, content: &str) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.push_lenient(line);
        }
    }

    fn push_lenient(&mut self, pattern: &str) {
        match IgnoreRule::compile(pattern) {
            Ok(rule) => self.rules.push(rule),
            Err(e) => warn!("skipping ignore pattern '{pattern}': {e}"),
        }
    }

    /// The patterns as written, in order.
    pub fn raw(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.raw.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check whether a path relative to the scan root is ignored.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        let path = to_slash_path(relative);
        if path.is_empty() {
            return false;
        }
        self.rules.iter().any(|rule| rule.matches(&path))
    }
}

/// Join the normal components of `path` with `/`.
fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
