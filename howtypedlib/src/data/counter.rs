//! High-level counting API.
//!
//! This module walks a project directory, classifies each file and
//! accumulates its statistics into a single [`Counts`] tree owned by the
//! walk. Percentages and scores are derived afterwards (see
//! [`crate::data::scores`]); [`analyze`] does both steps.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::HowTypedError;
use crate::source::ignore::IgnorePatterns;
use crate::Result;

use super::lines::count_logical_lines;
use super::stats::{Counts, FileType, Language};
use super::vue::{detect_script_kind, extract_script_block};

/// Extensions counted as plain JavaScript.
pub const JS_EXTENSIONS: [&str; 4] = ["js", "mjs", "cjs", "jsx"];
/// Extensions counted as plain TypeScript.
pub const TS_EXTENSIONS: [&str; 2] = ["ts", "tsx"];
/// Extension of Vue single-file components.
pub const VUE_EXTENSION: &str = "vue";

/// How a recognised source file is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Whole-file JavaScript or TypeScript
    Plain(Language),
    /// Vue component; the language depends on its script block
    Vue,
}

impl FileKind {
    /// Classify a path by its (case-sensitive) extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        if JS_EXTENSIONS.contains(&ext) {
            Some(FileKind::Plain(Language::Js))
        } else if TS_EXTENSIONS.contains(&ext) {
            Some(FileKind::Plain(Language::Ts))
        } else if ext == VUE_EXTENSION {
            Some(FileKind::Vue)
        } else {
            None
        }
    }
}

/// Options for a directory scan.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Paths to skip, relative to the scan root
    pub ignore: IgnorePatterns,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            ignore: IgnorePatterns::defaults(),
            follow_links: true,
        }
    }
}

impl CountOptions {
    /// Create new default options (built-in ignore patterns only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ignore patterns.
    pub fn ignore(mut self, patterns: IgnorePatterns) -> Self {
        self.ignore = patterns;
        self
    }

    /// Set whether symbolic links are followed.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

fn accumulate_kind(kind: FileKind, content: &str, counts: &mut Counts) -> bool {
    match kind {
        FileKind::Plain(language) => {
            counts.record(FileType::Plain, language, count_logical_lines(content));
            true
        }
        FileKind::Vue => {
            let Some(language) = detect_script_kind(content) else {
                return false;
            };
            // An unterminated script block still counts as a file, with no lines.
            let loc = extract_script_block(content)
                .map(count_logical_lines)
                .unwrap_or(0);
            counts.record(FileType::Vue, language, loc);
            true
        }
    }
}

/// Classify a file from its already-loaded content and add it to `counts`.
///
/// Returns whether the file was counted. Unrecognised extensions and Vue
/// components without a script block leave `counts` untouched.
pub fn accumulate_source(path: &Path, content: &str, counts: &mut Counts) -> bool {
    match FileKind::from_path(path) {
        Some(kind) => accumulate_kind(kind, content, counts),
        None => false,
    }
}

/// Classify a file and add it to `counts`, loading it through `read`.
///
/// `read` is only called for recognised extensions. A read error is returned
/// and `counts` is left untouched.
pub fn accumulate_file<F>(path: &Path, read: F, counts: &mut Counts) -> io::Result<bool>
where
    F: FnOnce(&Path) -> io::Result<String>,
{
    let Some(kind) = FileKind::from_path(path) else {
        return Ok(false);
    };
    let content = read(path)?;
    Ok(accumulate_kind(kind, &content, counts))
}

/// Read a file as text, replacing invalid UTF-8.
fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_ignored_entry(root: &Path, entry: &DirEntry, ignore: &IgnorePatterns) -> bool {
    entry
        .path()
        .strip_prefix(root)
        .map(|relative| ignore.is_ignored(relative))
        .unwrap_or(false)
}

/// Walk `root` and accumulate statistics for every counted file.
///
/// Ignored entries are skipped together with everything below them.
/// Entries that cannot be read are skipped as well; only a missing or
/// unreadable root is an error. The returned counts have no percentages
/// or scores yet.
///
/// # Example
///
/// ```rust
/// use howtypedlib::{count_directory, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("index.ts"), "export const a = 1\n").unwrap();
/// fs::write(dir.path().join("legacy.js"), "module.exports = {}\n").unwrap();
///
/// let counts = count_directory(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(counts.total.files, 2);
/// ```
pub fn count_directory(root: impl AsRef<Path>, options: &CountOptions) -> Result<Counts> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(HowTypedError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(HowTypedError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| HowTypedError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut counts = Counts::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        e.depth() == 0 || !is_ignored_entry(root, e, &options.ignore)
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        match accumulate_file(path, read_source, &mut counts) {
            Ok(true) => trace!("counted {}", path.display()),
            Ok(false) => {}
            Err(e) => debug!("skipping {}: {e}", path.display()),
        }
    }

    Ok(counts)
}

/// Walk `root` and derive percentages and scores.
///
/// This is the main entry point for producing a report.
///
/// # Example
///
/// ```rust
/// use howtypedlib::{analyze, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.ts"), "const a = 1\nconst b = 2\nconst c = 3\n").unwrap();
/// fs::write(dir.path().join("b.js"), "const d = 4\n").unwrap();
///
/// let counts = analyze(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(counts.percentages.files.ts, 50.0);
/// assert_eq!(counts.percentages.loc.ts, 75.0);
/// assert_eq!(counts.score, 67.5);
/// ```
pub fn analyze(root: impl AsRef<Path>, options: &CountOptions) -> Result<Counts> {
    Ok(count_directory(root, options)?.with_scores())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::FileStatistics;
    use tempfile::tempdir;

    fn create_source_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn assert_invariants(counts: &Counts) {
        let mut files = 0;
        let mut loc = 0;
        for category in counts.filetypes.values() {
            assert_eq!(category.total, category.js + category.ts);
            files += category.total.files;
            loc += category.total.loc;
        }
        assert_eq!(counts.total, FileStatistics::new(files, loc));
    }

    fn create_mixed_project(root: &Path) {
        create_source_file(
            &root.join("src/main.ts"),
            "import { createApp } from 'vue'
import App from './App.vue'

// mount
createApp(App).mount('#app')
",
        );
        create_source_file(
            &root.join("src/App.vue"),
            r#"<template>
  <HelloWorld msg="hi" />
</template>

<script setup lang="ts">
import HelloWorld from './components/HelloWorld.vue'
</script>
"#,
        );
        create_source_file(
            &root.join("src/components/HelloWorld.vue"),
            "<template><p>{{ msg }}</p></template>
<script>
export default {
  props: ['msg'],
}
</script>
",
        );
        create_source_file(
            &root.join("src/components/Static.vue"),
            "<template><p>static</p></template>\n",
        );
        create_source_file(
            &root.join("vite.config.js"),
            "export default {}\n",
        );
        create_source_file(&root.join("README.md"), "# readme\n");
        create_source_file(
            &root.join("node_modules/vue/index.js"),
            "module.exports = {}\n",
        );
        create_source_file(&root.join("dist/assets/index.js"), "bundle()\n");
        create_source_file(&root.join(".husky/pre-commit.js"), "hook()\n");
    }

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(
            FileKind::from_path(Path::new("a.js")),
            Some(FileKind::Plain(Language::Js))
        );
        assert_eq!(
            FileKind::from_path(Path::new("a.mjs")),
            Some(FileKind::Plain(Language::Js))
        );
        assert_eq!(
            FileKind::from_path(Path::new("a.cjs")),
            Some(FileKind::Plain(Language::Js))
        );
        assert_eq!(
            FileKind::from_path(Path::new("a.jsx")),
            Some(FileKind::Plain(Language::Js))
        );
        assert_eq!(
            FileKind::from_path(Path::new("a.ts")),
            Some(FileKind::Plain(Language::Ts))
        );
        assert_eq!(
            FileKind::from_path(Path::new("src/a.d.ts")),
            Some(FileKind::Plain(Language::Ts))
        );
        assert_eq!(
            FileKind::from_path(Path::new("a.tsx")),
            Some(FileKind::Plain(Language::Ts))
        );
        assert_eq!(FileKind::from_path(Path::new("a.vue")), Some(FileKind::Vue));

        assert_eq!(FileKind::from_path(Path::new("a.JS")), None);
        assert_eq!(FileKind::from_path(Path::new("a.json")), None);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), None);
        assert_eq!(FileKind::from_path(Path::new(".ts")), None);
    }

    #[test]
    fn test_accumulate_plain_sources() {
        let mut counts = Counts::new();

        assert!(accumulate_source(Path::new("a.ts"), "a\nb\nc\n", &mut counts));
        assert!(accumulate_source(Path::new("b.jsx"), "// c\nd\n", &mut counts));

        let plain = counts.category(FileType::Plain).unwrap();
        assert_eq!(plain.ts, FileStatistics::new(1, 3));
        assert_eq!(plain.js, FileStatistics::new(1, 1));
        assert_eq!(counts.total, FileStatistics::new(2, 4));
        assert_invariants(&counts);
    }

    #[test]
    fn test_accumulate_unknown_extension_is_untouched() {
        let mut counts = Counts::new();

        assert!(!accumulate_source(Path::new("notes.md"), "text\n", &mut counts));
        assert_eq!(counts, Counts::new());
    }

    #[test]
    fn test_accumulate_vue_counts_script_block_only() {
        let mut counts = Counts::new();
        let sfc = r#"<template>
  <div>{{ a }}</div>
</template>
<script lang="ts">
// comment
export default {
  data: () => ({ a: 1 }),
}
</script>
<style>
div { color: red; }
</style>
"#;

        assert!(accumulate_source(Path::new("A.vue"), sfc, &mut counts));

        let vue = counts.category(FileType::Vue).unwrap();
        assert_eq!(vue.ts, FileStatistics::new(1, 3));
        assert_eq!(vue.js, FileStatistics::default());
        assert_eq!(counts.total, FileStatistics::new(1, 3));
    }

    #[test]
    fn test_accumulate_vue_without_script_is_invisible() {
        let mut counts = Counts::new();

        assert!(!accumulate_source(
            Path::new("Static.vue"),
            "<template><p>x</p></template>",
            &mut counts
        ));
        assert_eq!(counts, Counts::new());
    }

    #[test]
    fn test_accumulate_vue_unclosed_script_counts_file_only() {
        let mut counts = Counts::new();

        assert!(accumulate_source(
            Path::new("Broken.vue"),
            "<script>\nconst a = 1\n",
            &mut counts
        ));

        let vue = counts.category(FileType::Vue).unwrap();
        assert_eq!(vue.js, FileStatistics::new(1, 0));
    }

    #[test]
    fn test_accumulate_file_skips_read_for_unknown_extension() {
        let mut counts = Counts::new();
        let result = accumulate_file(
            Path::new("image.png"),
            |_| panic!("should not read unrecognised files"),
            &mut counts,
        );

        assert!(!result.unwrap());
    }

    #[test]
    fn test_accumulate_file_read_error_leaves_counts() {
        let mut counts = Counts::new();
        let result = accumulate_file(
            Path::new("locked.ts"),
            |_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            &mut counts,
        );

        assert!(result.is_err());
        assert_eq!(counts, Counts::new());
    }

    #[test]
    fn test_count_directory_end_to_end() {
        let temp = tempdir().unwrap();
        create_source_file(
            &temp.path().join("a.ts"),
            "const a = 1\nconst b = 2\nconst c = 3\n",
        );
        create_source_file(&temp.path().join("b.js"), "const d = 4\n");

        let counts = analyze(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(counts.total, FileStatistics::new(2, 4));
        let plain = counts.category(FileType::Plain).unwrap();
        assert_eq!(plain.ts, FileStatistics::new(1, 3));
        assert_eq!(plain.js, FileStatistics::new(1, 1));
        assert_eq!(counts.percentages.files.ts, 50.0);
        assert_eq!(counts.percentages.loc.ts, 75.0);
        assert_eq!(counts.score, 67.5);
    }

    #[test]
    fn test_count_directory_mixed_project() {
        let temp = tempdir().unwrap();
        create_mixed_project(temp.path());

        let counts = count_directory(temp.path(), &CountOptions::new()).unwrap();

        let plain = counts.category(FileType::Plain).unwrap();
        assert_eq!(plain.ts, FileStatistics::new(1, 3));
        assert_eq!(plain.js, FileStatistics::new(1, 1));

        let vue = counts.category(FileType::Vue).unwrap();
        assert_eq!(vue.ts, FileStatistics::new(1, 1));
        assert_eq!(vue.js, FileStatistics::new(1, 3));

        assert_eq!(counts.total, FileStatistics::new(4, 8));
        assert_invariants(&counts);
    }

    #[test]
    fn test_count_directory_respects_node_modules() {
        let temp = tempdir().unwrap();
        create_source_file(
            &temp.path().join("node_modules/pkg/index.ts"),
            "export {}\n",
        );
        create_source_file(
            &temp.path().join("packages/app/node_modules/lib/index.js"),
            "x()\n",
        );
        create_source_file(&temp.path().join("packages/app/src/index.ts"), "y()\n");

        let counts = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(counts.total, FileStatistics::new(1, 1));
    }

    #[test]
    fn test_count_directory_with_custom_ignore() {
        let temp = tempdir().unwrap();
        create_source_file(&temp.path().join("src/index.ts"), "a()\n");
        create_source_file(&temp.path().join("src/legacy/old.js"), "b()\n");
        create_source_file(&temp.path().join("coverage/lcov.js"), "c()\n");

        let ignore = IgnorePatterns::defaults()
            .add_many(&["coverage/", "src/legacy"])
            .unwrap();
        let counts = count_directory(temp.path(), &CountOptions::new().ignore(ignore)).unwrap();

        assert_eq!(counts.total, FileStatistics::new(1, 1));
        assert_eq!(
            counts.category(FileType::Plain).unwrap().ts,
            FileStatistics::new(1, 1)
        );
    }

    #[test]
    fn test_ignore_matches_relative_to_scan_root() {
        // The scan root itself lives under a directory named `build`; only
        // paths below the root are matched.
        let temp = tempdir().unwrap();
        let root = temp.path().join("build").join("project");
        create_source_file(&root.join("index.ts"), "a()\n");

        let counts = count_directory(&root, &CountOptions::new()).unwrap();

        assert_eq!(counts.total.files, 1);
    }

    #[test]
    fn test_count_directory_without_ignores_counts_everything() {
        let temp = tempdir().unwrap();
        create_source_file(&temp.path().join("node_modules/a.js"), "a()\n");
        create_source_file(&temp.path().join("b.js"), "b()\n");

        let options = CountOptions::new().ignore(IgnorePatterns::new());
        let counts = count_directory(temp.path(), &options).unwrap();

        assert_eq!(counts.total.files, 2);
    }

    #[test]
    fn test_count_directory_empty() {
        let temp = tempdir().unwrap();

        let counts = analyze(temp.path(), &CountOptions::new()).unwrap();

        assert!(counts.is_empty());
        assert_eq!(counts.score, 0.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_count_directory_skips_broken_symlink() {
        let temp = tempdir().unwrap();
        create_source_file(&temp.path().join("ok.ts"), "a()\n");
        std::os::unix::fs::symlink(temp.path().join("missing.ts"), temp.path().join("dangling.ts"))
            .unwrap();

        let counts = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(counts.total, FileStatistics::new(1, 1));
    }

    #[test]
    fn test_count_directory_nonexistent() {
        let result = count_directory("/nonexistent/path", &CountOptions::new());

        assert!(matches!(result, Err(HowTypedError::PathNotFound(_))));
    }

    #[test]
    fn test_count_directory_on_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.ts");
        create_source_file(&file, "a()\n");

        let result = count_directory(&file, &CountOptions::new());

        assert!(matches!(result, Err(HowTypedError::NotADirectory(_))));
    }
}
