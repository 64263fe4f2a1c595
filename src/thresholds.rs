//! Band boundary computation
//!
//! The four rank boundaries are pure functions of the distinct-token
//! count and the configured band fractions. Boundaries that open a band
//! round up, boundaries that close one round down; the leftover fraction
//! between the bands splits evenly around the common band.

use serde::Serialize;

/// Relative widths of the three bands, as fractions of the distinct count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandFractions {
    pub popular: f64,
    pub common: f64,
    pub rare: f64,
}

impl Default for BandFractions {
    fn default() -> Self {
        Self {
            popular: 0.05,
            common: 0.05,
            rare: 0.05,
        }
    }
}

impl BandFractions {
    /// Fraction of ranks deliberately left out between the bands.
    pub fn margin(&self) -> f64 {
        1.0 - (self.popular + self.common + self.rare)
    }
}

/// Rank boundaries for one token class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    /// Last rank of the popular band
    pub popular: usize,
    /// First rank of the common band
    pub common_left: usize,
    /// Last rank of the common band
    pub common_right: usize,
    /// First rank of the rare band
    pub rare: usize,
}

impl Thresholds {
    /// Compute boundaries for a ranking of `distinct` tokens.
    ///
    /// A distinct count of zero yields all-zero boundaries, which in turn
    /// produce empty bands.
    pub fn compute(distinct: usize, fractions: &BandFractions) -> Self {
        let n = distinct as f64;
        let half_margin = fractions.margin() / 2.0;

        Self {
            popular: (n * fractions.popular).ceil() as usize,
            common_left: (n * (fractions.popular + half_margin)).floor() as usize,
            common_right: (n * (1.0 - fractions.rare - half_margin)).ceil() as usize,
            rare: (n * (1.0 - fractions.rare)).floor() as usize,
        }
    }
}
