//! Corpus profiling pipeline
//!
//! Drives normalize → tokenize → count over the input lines for both
//! token classes, then ranks the aggregated counts, derives thresholds,
//! and partitions the bands. The per-line tally is the unit of
//! parallelism: workers tally disjoint partitions of the lines into
//! private counters that merge once at the end, so no shared mutable
//! state exists during aggregation and the parallel and sequential paths
//! produce identical results.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

use crate::bands::Bands;
use crate::counter::TokenCounter;
use crate::normalizer::normalize_line;
use crate::ranker::{rank, RankedEntry};
use crate::thresholds::{BandFractions, Thresholds};
use crate::tokenizer::{extract_letters, extract_words};

/// Which token class a profile describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Words,
    Letters,
}

impl TokenClass {
    /// Plural label used in report headings.
    pub fn plural(&self) -> &'static str {
        match self {
            TokenClass::Words => "words",
            TokenClass::Letters => "letters",
        }
    }

    /// Singular label used as a table column header.
    pub fn singular(&self) -> &'static str {
        match self {
            TokenClass::Words => "Word",
            TokenClass::Letters => "Letter",
        }
    }
}

/// Tokenization settings applied to every line.
#[derive(Debug, Clone)]
pub struct TokenRules {
    /// Minimum word length kept by word extraction
    pub min_word_len: usize,
    /// Characters skipped during letter extraction
    pub letter_excludes: HashSet<char>,
}

impl Default for TokenRules {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            letter_excludes: [' ', '-'].into_iter().collect(),
        }
    }
}

/// Full profiling result for one token class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassProfile {
    pub class: TokenClass,
    /// Total token occurrences
    pub total: u64,
    /// Number of distinct tokens
    pub distinct: usize,
    pub thresholds: Thresholds,
    /// Complete ranking, most frequent first
    pub entries: Vec<RankedEntry>,
    pub bands: Bands,
}

impl ClassProfile {
    /// Rank, threshold, and band one class's aggregated counts.
    pub fn from_counter(class: TokenClass, counter: &TokenCounter, fractions: &BandFractions) -> Self {
        let entries = rank(counter);
        let thresholds = Thresholds::compute(entries.len(), fractions);
        let bands = Bands::partition(&entries, &thresholds);
        Self {
            class,
            total: counter.total(),
            distinct: entries.len(),
            thresholds,
            entries,
            bands,
        }
    }
}

/// Profiling results for both token classes of a corpus.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusProfile {
    pub words: ClassProfile,
    pub letters: ClassProfile,
}

/// Tally one raw line into the word and letter counters.
fn tally_line(line: &str, rules: &TokenRules, words: &mut TokenCounter, letters: &mut TokenCounter) {
    let cleaned = normalize_line(line);
    for word in extract_words(&cleaned, rules.min_word_len) {
        words.add(word);
    }
    let mut buf = [0u8; 4];
    for letter in extract_letters(&cleaned, &rules.letter_excludes) {
        letters.add(letter.encode_utf8(&mut buf));
    }
}

fn build_profile(words: TokenCounter, letters: TokenCounter, fractions: &BandFractions) -> CorpusProfile {
    CorpusProfile {
        words: ClassProfile::from_counter(TokenClass::Words, &words, fractions),
        letters: ClassProfile::from_counter(TokenClass::Letters, &letters, fractions),
    }
}

/// Profile a corpus on the calling thread.
///
/// Lines may arrive in any order; the result depends only on their
/// contents.
pub fn profile_corpus<I, S>(lines: I, rules: &TokenRules, fractions: &BandFractions) -> CorpusProfile
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = TokenCounter::new();
    let mut letters = TokenCounter::new();
    for line in lines {
        tally_line(line.as_ref(), rules, &mut words, &mut letters);
    }
    build_profile(words, letters, fractions)
}

/// Profile a corpus across rayon workers.
///
/// Each worker folds a partition of the lines into private counters;
/// the partials merge by per-key summation, so the result matches
/// [`profile_corpus`] regardless of how rayon splits the input.
pub fn profile_corpus_parallel(
    lines: &[String],
    rules: &TokenRules,
    fractions: &BandFractions,
) -> CorpusProfile {
    let (words, letters) = lines
        .par_iter()
        .fold(
            || (TokenCounter::new(), TokenCounter::new()),
            |(mut words, mut letters), line| {
                tally_line(line, rules, &mut words, &mut letters);
                (words, letters)
            },
        )
        .reduce(
            || (TokenCounter::new(), TokenCounter::new()),
            |(mut words_a, mut letters_a), (words_b, letters_b)| {
                words_a.merge(words_b);
                letters_a.merge(letters_b);
                (words_a, letters_a)
            },
        );
    build_profile(words, letters, fractions)
}
