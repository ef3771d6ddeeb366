//! Logical line counting for JavaScript-family source text.
//!
//! This is a line-based heuristic, not a lexer. A line is "logical" when it
//! is neither blank nor consumed by a comment, where comments are recognised
//! only by what a trimmed line starts or ends with:
//!
//! - a line starting with `/*` opens a block comment and is not counted
//! - a line ending with `*/` closes it and is not counted
//! - lines inside an open block comment or starting with `//` are not counted
//!
//! Consequences worth knowing: `code(); /* note */` is not counted because it
//! ends with `*/`, and an unclosed `/*` swallows the rest of the input.

/// Count the logical lines in `text`.
pub fn count_logical_lines(text: &str) -> u64 {
    let mut in_block_comment = false;
    let mut count = 0;

    for line in text.split('\n') {
        let trimmed = line.trim();

        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }

        if trimmed.ends_with("*/") {
            in_block_comment = false;
            continue;
        }

        if in_block_comment || trimmed.starts_with("//") || trimmed.is_empty() {
            continue;
        }

        count += 1;
    }

    count
}
