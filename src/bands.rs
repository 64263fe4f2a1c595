//! Band partitioning of ranked tokens
//!
//! Splits a ranking into popular, common, and rare sub-sequences using
//! inclusive rank ranges. Entries between the popular and common
//! boundaries (and between the common and rare boundaries) belong to no
//! band; for very small rankings the ranges can instead overlap. Both
//! behaviors are intended and preserved.

use serde::Serialize;

use crate::ranker::RankedEntry;
use crate::thresholds::Thresholds;

/// The three band sub-sequences of one ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bands {
    pub popular: Vec<RankedEntry>,
    pub common: Vec<RankedEntry>,
    pub rare: Vec<RankedEntry>,
}

impl Bands {
    /// Partition a ranking into bands.
    ///
    /// Popular covers ranks `[1, popular]`, common covers
    /// `[common_left, common_right]`, and rare covers `[rare, N]`, all
    /// inclusive on both ends.
    pub fn partition(entries: &[RankedEntry], thresholds: &Thresholds) -> Self {
        let n = entries.len();
        Self {
            popular: between(entries, 1, thresholds.popular),
            common: between(entries, thresholds.common_left, thresholds.common_right),
            rare: between(entries, thresholds.rare, n),
        }
    }
}

/// Entries whose rank falls in `[lo, hi]`.
fn between(entries: &[RankedEntry], lo: usize, hi: usize) -> Vec<RankedEntry> {
    entries
        .iter()
        .filter(|e| e.rank >= lo && e.rank <= hi)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(n: usize) -> Vec<RankedEntry> {
        (1..=n)
            .map(|rank| RankedEntry {
                rank,
                token: format!("t{rank}"),
                frequency: (n - rank + 1) as u64,
            })
            .collect()
    }

    fn ranks(entries: &[RankedEntry]) -> Vec<usize> {
        entries.iter().map(|e| e.rank).collect()
    }

    #[test]
    fn test_partition_leaves_margin_unbanded() {
        // 20 ranks with default 5/5/5 fractions: popular=1, common=9..11, rare=19
        let entries = ranking(20);
        let thresholds = Thresholds {
            popular: 1,
            common_left: 9,
            common_right: 11,
            rare: 19,
        };
        let bands = Bands::partition(&entries, &thresholds);
        assert_eq!(ranks(&bands.popular), vec![1]);
        assert_eq!(ranks(&bands.common), vec![9, 10, 11]);
        assert_eq!(ranks(&bands.rare), vec![19, 20]);

        // Ranks 2..=8 and 12..=18 land in no band
        let banded: Vec<usize> = bands
            .popular
            .iter()
            .chain(&bands.common)
            .chain(&bands.rare)
            .map(|e| e.rank)
            .collect();
        for rank in (2..=8).chain(12..=18) {
            assert!(!banded.contains(&rank), "rank {rank} should be unbanded");
        }
    }

    #[test]
    fn test_partition_ranges_are_inclusive() {
        let entries = ranking(10);
        let thresholds = Thresholds {
            popular: 3,
            common_left: 4,
            common_right: 6,
            rare: 8,
        };
        let bands = Bands::partition(&entries, &thresholds);
        assert_eq!(ranks(&bands.popular), vec![1, 2, 3]);
        assert_eq!(ranks(&bands.common), vec![4, 5, 6]);
        assert_eq!(ranks(&bands.rare), vec![8, 9, 10]);
    }

    #[test]
    fn test_partition_overlapping_ranges() {
        // A single-token ranking with reference rounding: every band
        // reaches the one entry.
        let entries = ranking(1);
        let thresholds = Thresholds {
            popular: 1,
            common_left: 0,
            common_right: 1,
            rare: 0,
        };
        let bands = Bands::partition(&entries, &thresholds);
        assert_eq!(ranks(&bands.popular), vec![1]);
        assert_eq!(ranks(&bands.common), vec![1]);
        assert_eq!(ranks(&bands.rare), vec![1]);
    }

    #[test]
    fn test_partition_empty_ranking() {
        let bands = Bands::partition(&[], &Thresholds::default());
        assert!(bands.popular.is_empty());
        assert!(bands.common.is_empty());
        assert!(bands.rare.is_empty());
    }
}
