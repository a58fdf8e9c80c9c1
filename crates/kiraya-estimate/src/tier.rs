//! The three estimation tiers.

use kiraya_dataset::{ReferenceDataset, RentSummary};
use kiraya_types::{Prediction, PropertyQuery, ReferenceRecord, Tier};
use tracing::trace;

use crate::config::EstimatorConfig;
use crate::scoring::{is_similar, record_weight, similarity_score};

/// Runs a single tier. `None` means the tier had no candidates and the next
/// tier in [`Tier::ORDER`] should be tried.
pub(crate) fn attempt(
    tier: Tier,
    query: &PropertyQuery,
    dataset: &ReferenceDataset,
    config: &EstimatorConfig,
) -> Option<Prediction> {
    match tier {
        Tier::Similarity => similarity(query, dataset, config),
        Tier::StateAverage => state_average(query, dataset),
        Tier::NationalAverage => Some(national_average(query, dataset)),
    }
}

/// Weighted average of similar records, scaled by query size over their mean size.
fn similarity(
    query: &PropertyQuery,
    dataset: &ReferenceDataset,
    config: &EstimatorConfig,
) -> Option<Prediction> {
    let survivors: Vec<&ReferenceRecord> = dataset
        .iter()
        .filter(|record| is_similar(query, record, &config.similarity))
        .collect();

    if survivors.is_empty() {
        return None;
    }

    let mut weighted_rent_total = 0.0;
    let mut weight_total = 0.0;
    let mut size_total = 0.0;
    for record in &survivors {
        let weight = record_weight(query, record, &config.weighting);
        trace!(
            location = %record.location,
            city = %record.city,
            score = similarity_score(query, record, &config.similarity),
            weight,
            "similar record"
        );
        weighted_rent_total += record.rent * weight;
        weight_total += weight;
        size_total += record.size;
    }

    let weighted_rent = weighted_rent_total / weight_total;
    let mean_size = size_total / survivors.len() as f64;
    let size_adjustment = query.size() / mean_size;

    Some(Prediction::new(
        round_rent(weighted_rent * size_adjustment),
        Tier::Similarity,
        survivors.len(),
    ))
}

/// Per-area average over the records in the query's state.
fn state_average(query: &PropertyQuery, dataset: &ReferenceDataset) -> Option<Prediction> {
    RentSummary::of(dataset.in_state(query.state())).map(|summary| {
        Prediction::new(
            round_rent(summary.rent_for_size(query.size())),
            Tier::StateAverage,
            summary.count,
        )
    })
}

/// Per-area average over the whole dataset. Always applicable.
pub(crate) fn national_average(query: &PropertyQuery, dataset: &ReferenceDataset) -> Prediction {
    let summary = dataset.national_summary();
    Prediction::new(
        round_rent(summary.rent_for_size(query.size())),
        Tier::NationalAverage,
        summary.count,
    )
}

/// Rounds to the nearest rupee.
fn round_rent(rent: f64) -> u64 {
    rent.round().max(0.0) as u64
}
