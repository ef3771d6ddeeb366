//! Script block detection for Vue single-file components.

use std::sync::OnceLock;

use regex::Regex;

use super::stats::Language;

fn regex_ts_script() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<script\s+(?:setup\s+)?lang="ts""#).unwrap())
}

fn regex_script_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<script([^>]*)>").unwrap())
}

fn regex_lang_ts_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\blang="ts""#).unwrap())
}

fn regex_script_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<script.*?>((?s:.*?))</script>").unwrap())
}

/// Detect which language a component's script block is written in.
///
/// Returns `None` when the component has no script block at all; such files
/// are left out of every count.
pub fn detect_script_kind(sfc: &str) -> Option<Language> {
    if regex_ts_script().is_match(sfc) {
        return Some(Language::Ts);
    }

    let has_js_script = regex_script_open()
        .captures_iter(sfc)
        .any(|caps| !regex_lang_ts_attr().is_match(&caps[1]));

    has_js_script.then_some(Language::Js)
}

/// Body of the first `<script ...>...</script>` block.
///
/// The opening tag must sit on a single line; the body may span many.
pub fn extract_script_block(sfc: &str) -> Option<&str> {
    regex_script_block()
        .captures(sfc)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}
