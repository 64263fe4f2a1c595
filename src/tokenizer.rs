//! Token extraction from normalized lines
//!
//! Two independent extractions run over every cleaned line: whole words
//! for the word profile, and individual characters for the letter profile.

use std::collections::HashSet;

/// Extract word tokens from a normalized line.
///
/// Splits on whitespace and keeps only tokens of at least `min_len`
/// characters. With the default minimum of 2, single-letter words are
/// discarded.
///
/// # Examples
///
/// ```
/// use lexband::tokenizer::extract_words;
///
/// assert_eq!(extract_words("a cat sat", 2), vec!["cat", "sat"]);
/// ```
pub fn extract_words(line: &str, min_len: usize) -> Vec<&str> {
    line.split_whitespace().filter(|w| w.len() >= min_len).collect()
}

/// Extract letter tokens from a normalized line.
///
/// Walks every character of the line rather than splitting into words, so
/// each occurrence of a letter counts once. Characters in `exclude` are
/// skipped, and only alphabetic characters are kept.
pub fn extract_letters(line: &str, exclude: &HashSet<char>) -> Vec<char> {
    line.chars()
        .filter(|c| !exclude.contains(c) && c.is_alphabetic())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_exclude() -> HashSet<char> {
        [' ', '-'].into_iter().collect()
    }

    #[test]
    fn test_words_drop_single_letters() {
        assert_eq!(extract_words("a cat sat on a mat", 2), vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn test_words_respect_min_len() {
        assert_eq!(extract_words("to the lighthouse", 3), vec!["the", "lighthouse"]);
    }

    #[test]
    fn test_words_empty_line() {
        assert!(extract_words("", 2).is_empty());
    }

    #[test]
    fn test_letters_count_every_occurrence() {
        assert_eq!(extract_letters("a bb", &default_exclude()), vec!['a', 'b', 'b']);
    }

    #[test]
    fn test_letters_skip_space_and_hyphen() {
        assert_eq!(extract_letters("a-bb", &default_exclude()), vec!['a', 'b', 'b']);
    }

    #[test]
    fn test_letters_skip_non_alphabetic() {
        assert_eq!(extract_letters("a1b?", &default_exclude()), vec!['a', 'b']);
    }

    #[test]
    fn test_letters_custom_exclusion() {
        let exclude: HashSet<char> = [' ', 'e'].into_iter().collect();
        assert_eq!(extract_letters("see", &exclude), vec!['s']);
    }

    #[test]
    fn test_deterministic_for_same_line() {
        let line = "the quick brown fox";
        assert_eq!(extract_words(line, 2), extract_words(line, 2));
        assert_eq!(
            extract_letters(line, &default_exclude()),
            extract_letters(line, &default_exclude())
        );
    }
}
