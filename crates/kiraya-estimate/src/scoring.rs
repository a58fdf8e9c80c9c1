//! Per-record similarity scores and weights.
//!
//! Both functions look at a single (query, record) pair, so the policy can be
//! tested without a dataset.

use kiraya_types::{PropertyQuery, ReferenceRecord};

use crate::config::{SimilarityPolicy, WeightPolicy};

/// Coarse similarity score of `record` against `query`.
///
/// With the default policy a record reaches the threshold of 3 through any of:
/// a city match alone, a state match alone, or size and bedroom closeness
/// together with no location match at all.
#[must_use]
pub fn similarity_score(
    query: &PropertyQuery,
    record: &ReferenceRecord,
    policy: &SimilarityPolicy,
) -> u32 {
    let mut score: u32 = 0;
    if record.state == query.state() {
        score = score.saturating_add(policy.state_points);
    }
    if record.city == query.city() {
        score = score.saturating_add(policy.city_points);
    }
    if (record.size - query.size()).abs() <= policy.size_tolerance {
        score = score.saturating_add(policy.size_points);
    }
    if record.bedrooms.abs_diff(query.bedrooms()) <= policy.bedroom_tolerance {
        score = score.saturating_add(policy.bedroom_points);
    }
    score
}

/// Returns true if `record` reaches the similarity threshold.
#[must_use]
pub fn is_similar(
    query: &PropertyQuery,
    record: &ReferenceRecord,
    policy: &SimilarityPolicy,
) -> bool {
    similarity_score(query, record, policy) >= policy.threshold
}

/// Contribution weight of a similar record in the weighted average.
#[must_use]
pub fn record_weight(
    query: &PropertyQuery,
    record: &ReferenceRecord,
    policy: &WeightPolicy,
) -> f64 {
    let mut weight = policy.base;
    if record.state == query.state() {
        weight += policy.state;
    }
    if record.city == query.city() {
        weight += policy.city;
    }
    if (record.size - query.size()).abs() <= policy.size_band {
        weight += policy.size;
    }
    if record.bedrooms == query.bedrooms() {
        weight += policy.bedrooms;
    }
    if record.bathrooms == query.bathrooms() {
        weight += policy.bathrooms;
    }
    if record.parking == query.parking() {
        weight += policy.parking;
    }
    weight
}
