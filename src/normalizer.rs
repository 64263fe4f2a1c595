//! Line normalization for corpus text
//!
//! Reduces a raw input line to lowercase `a-z` runs separated by single
//! spaces. Every downstream stage counts on lines being in this shape.

use regex::Regex;
use std::sync::OnceLock;

/// Matches every character the pipeline does not count.
fn non_letter() -> &'static Regex {
    static NON_LETTER: OnceLock<Regex> = OnceLock::new();
    NON_LETTER.get_or_init(|| Regex::new("[^a-z]").expect("static pattern compiles"))
}

/// Normalize one line of raw corpus text.
///
/// Cleaning steps, applied in order: drop embedded newline characters,
/// lowercase, replace every character outside `a-z` with a space, then
/// collapse whitespace runs and trim. Empty lines and lines holding a
/// single newline pass through unchanged.
///
/// Normalizing an already-normalized line returns it as-is.
///
/// # Examples
///
/// ```
/// use lexband::normalizer::normalize_line;
///
/// assert_eq!(normalize_line("The cat sat. The CAT sat!!"), "the cat sat the cat sat");
/// assert_eq!(normalize_line("42!?"), "");
/// ```
pub fn normalize_line(line: &str) -> String {
    if line.is_empty() || line == "\n" {
        return line.to_string();
    }

    let stripped: String = line.chars().filter(|&c| c != '\n').collect();
    let lowered = stripped.to_lowercase();
    let scrubbed = non_letter().replace_all(&lowered, " ");
    scrubbed.split_whitespace().collect::<Vec<_>>().join(" ")
}
