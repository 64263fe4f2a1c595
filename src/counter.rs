//! Token frequency counting
//!
//! `TokenCounter` is the aggregation state of the pipeline: a token →
//! count table plus a running occurrence total. Counting is commutative
//! and associative, so counters built from disjoint partitions of the
//! corpus merge by summing per-key counts — partial results combine in
//! any order without changing the outcome.

use serde::Serialize;
use std::collections::HashMap;

/// Tracks token frequency for one token class.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCounter {
    /// Map from token to occurrence count
    counts: HashMap<String, u64>,
    /// Total token occurrences
    total: u64,
}

impl TokenCounter {
    /// Create a new empty token counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token occurrence.
    pub fn add(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Add multiple occurrences of a token.
    pub fn add_count(&mut self, token: &str, count: u64) {
        *self.counts.entry(token.to_string()).or_insert(0) += count;
        self.total += count;
    }

    /// Get the count for a specific token.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Get total token occurrences.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get the number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether no tokens have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fold another counter into this one by summing counts per token.
    pub fn merge(&mut self, other: TokenCounter) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Iterate over `(token, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_occurrences() {
        let mut counter = TokenCounter::new();
        for token in ["the", "cat", "the"] {
            counter.add(token);
        }
        assert_eq!(counter.get("the"), 2);
        assert_eq!(counter.get("cat"), 1);
        assert_eq!(counter.get("dog"), 0);
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.distinct(), 2);
    }

    #[test]
    fn test_add_count() {
        let mut counter = TokenCounter::new();
        counter.add_count("the", 5);
        counter.add("the");
        assert_eq!(counter.get("the"), 6);
        assert_eq!(counter.total(), 6);
    }

    #[test]
    fn test_empty() {
        let counter = TokenCounter::new();
        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);
        assert_eq!(counter.distinct(), 0);
    }

    #[test]
    fn test_merge_sums_per_key() {
        let mut left = TokenCounter::new();
        left.add("the");
        left.add("cat");

        let mut right = TokenCounter::new();
        right.add("the");
        right.add("sat");

        left.merge(right);
        assert_eq!(left.get("the"), 2);
        assert_eq!(left.get("cat"), 1);
        assert_eq!(left.get("sat"), 1);
        assert_eq!(left.total(), 4);
    }

    #[test]
    fn test_merge_equals_whole() {
        let tokens = ["the", "cat", "sat", "the", "cat", "sat", "on", "the", "mat"];

        let mut whole = TokenCounter::new();
        for token in tokens {
            whole.add(token);
        }

        // Any partition of the input merges back to the same table
        for split in 0..tokens.len() {
            let (head, tail) = tokens.split_at(split);
            let mut first = TokenCounter::new();
            for token in head {
                first.add(token);
            }
            let mut second = TokenCounter::new();
            for token in tail {
                second.add(token);
            }
            first.merge(second);
            assert_eq!(first, whole);
        }
    }

    #[test]
    fn test_merge_into_empty() {
        let mut counter = TokenCounter::new();
        let mut other = TokenCounter::new();
        other.add("word");
        counter.merge(other);
        assert_eq!(counter.get("word"), 1);
        assert_eq!(counter.total(), 1);
    }
}
