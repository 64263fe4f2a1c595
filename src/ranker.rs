//! Frequency ranking
//!
//! Orders the distinct tokens of a counter by descending frequency and
//! assigns dense 1-based ranks. Tokens with equal frequency order
//! alphabetically, so repeated runs over the same corpus always produce
//! the same ranking regardless of how the counts were aggregated.

use serde::Serialize;

use crate::counter::TokenCounter;

/// One row of a ranking: a token, its frequency, and its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub token: String,
    pub frequency: u64,
}

/// Rank a counter's tokens by descending frequency.
///
/// Equal frequencies break ties by ascending token. The output holds one
/// entry per distinct token, with ranks running 1..=N and no gaps.
pub fn rank(counter: &TokenCounter) -> Vec<RankedEntry> {
    let mut items: Vec<(&str, u64)> = counter.iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    items
        .into_iter()
        .enumerate()
        .map(|(i, (token, frequency))| RankedEntry {
            rank: i + 1,
            token: token.to_string(),
            frequency,
        })
        .collect()
}
