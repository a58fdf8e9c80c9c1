//! Rent predictions and estimation tiers.

use serde::{Deserialize, Serialize};

/// Fallback stage of the estimation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Weighted average over records that pass the similarity filter.
    Similarity,
    /// Per-area average over records in the query's state.
    StateAverage,
    /// Per-area average over the whole dataset.
    NationalAverage,
}

impl Tier {
    /// Tiers in evaluation order. The first tier with a non-empty candidate set wins.
    pub const ORDER: [Self; 3] = [Self::Similarity, Self::StateAverage, Self::NationalAverage];

    /// Returns the tier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::StateAverage => "state_average",
            Self::NationalAverage => "national_average",
        }
    }

    /// Returns a human-readable description of the tier.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Similarity => "weighted average of similar properties",
            Self::StateAverage => "state average rent per sq ft",
            Self::NationalAverage => "national average rent per sq ft",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monthly rent estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Estimated monthly rent, rounded to the nearest rupee.
    pub rent: u64,
    /// Tier that produced the estimate.
    pub tier: Tier,
    /// Number of reference records the tier averaged over.
    pub candidates: usize,
}

impl Prediction {
    /// Creates a new prediction.
    #[must_use]
    pub const fn new(rent: u64, tier: Tier, candidates: usize) -> Self {
        Self {
            rent,
            tier,
            candidates,
        }
    }
}
