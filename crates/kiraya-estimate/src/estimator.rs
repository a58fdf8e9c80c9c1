//! Rent estimation logic.

use std::sync::OnceLock;

use kiraya_dataset::ReferenceDataset;
use kiraya_types::{Prediction, PropertyQuery, ReferenceRecord, Result, Tier};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EstimatorConfig;
use crate::scoring::{record_weight, similarity_score};
use crate::tier;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// A reference record that passed the similarity filter, with its score and weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparable<'a> {
    /// The matching record.
    pub record: &'a ReferenceRecord,
    /// Similarity score against the query.
    pub score: u32,
    /// Weight in the weighted average.
    pub weight: f64,
}

/// Monthly rent estimator.
///
/// Estimation is a pure function of the query and the dataset, so a single
/// estimator can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator with the default scoring and weighting policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an estimator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(config: EstimatorConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected estimator config");
            return Err(e);
        }
        Ok(Self { config })
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::new)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimates the monthly rent for `query`.
    ///
    /// Tiers are tried in [`Tier::ORDER`]; the first one with candidates
    /// decides the result and results are never blended across tiers.
    #[must_use]
    pub fn estimate(&self, query: &PropertyQuery, dataset: &ReferenceDataset) -> Prediction {
        let prediction = Tier::ORDER
            .iter()
            .find_map(|&tier| tier::attempt(tier, query, dataset, &self.config))
            .unwrap_or_else(|| tier::national_average(query, dataset));

        debug!(
            query = %query,
            tier = %prediction.tier,
            candidates = prediction.candidates,
            rent = prediction.rent,
            "estimated rent"
        );
        prediction
    }

    /// Estimates the monthly rent for `query`, returning only the amount.
    #[must_use]
    pub fn estimate_rent(&self, query: &PropertyQuery, dataset: &ReferenceDataset) -> u64 {
        self.estimate(query, dataset).rent
    }

    /// Returns the records that pass the similarity filter, highest weight first.
    ///
    /// Ties keep dataset order.
    #[must_use]
    pub fn comparables<'a>(
        &self,
        query: &PropertyQuery,
        dataset: &'a ReferenceDataset,
    ) -> Vec<Comparable<'a>> {
        let mut comparables: Vec<Comparable<'a>> = dataset
            .iter()
            .filter_map(|record| {
                let score = similarity_score(query, record, &self.config.similarity);
                (score >= self.config.similarity.threshold).then(|| Comparable {
                    record,
                    score,
                    weight: record_weight(query, record, &self.config.weighting),
                })
            })
            .collect();

        comparables.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        comparables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiraya_dataset::RentSummary;

    fn bangalore_query() -> PropertyQuery {
        PropertyQuery::new("Karnataka", "Bangalore", 1800.0, 4, 4, 2).unwrap()
    }

    fn strict_estimator() -> Estimator {
        let mut config = EstimatorConfig::default();
        config.similarity.threshold = 4;
        Estimator::with_config(config).unwrap()
    }

    #[test]
    fn test_bangalore_scenario() {
        let estimator = Estimator::default();
        let dataset = ReferenceDataset::global();
        let query = bangalore_query();

        let prediction = estimator.estimate(&query, dataset);
        assert_eq!(prediction.tier, Tier::Similarity);
        assert_eq!(prediction.candidates, 11);
        assert_eq!(prediction.rent, 51763);

        let comparables = estimator.comparables(&query, dataset);
        assert_eq!(comparables.len(), 11);

        let bangalore: Vec<_> = comparables
            .iter()
            .filter(|c| c.record.city == "Bangalore")
            .collect();
        assert_eq!(bangalore.len(), 3);
        assert!(bangalore.iter().all(|c| c.score >= 8));

        // The full attribute match carries the highest weight of all.
        assert_eq!(comparables[0].record.size, 1836.0);
        assert_eq!(comparables[0].score, 11);
    }

    #[test]
    fn test_deterministic() {
        let estimator = Estimator::global();
        let dataset = ReferenceDataset::global();
        let query = bangalore_query();

        assert_eq!(
            estimator.estimate(&query, dataset),
            estimator.estimate(&query, dataset)
        );
    }

    #[test]
    fn test_national_fallback() {
        let estimator = Estimator::default();
        let dataset = ReferenceDataset::global();
        // No record in Goa and every size is more than 500 sq ft away.
        let query = PropertyQuery::new("Goa", "Panaji", 5000.0, 10, 1, 0).unwrap();

        let prediction = estimator.estimate(&query, dataset);
        let national = RentSummary::of(dataset).unwrap();

        assert_eq!(prediction.tier, Tier::NationalAverage);
        assert_eq!(prediction.candidates, 25);
        assert_eq!(
            prediction.rent,
            (national.mean_rent / national.mean_size * 5000.0).round() as u64
        );
        assert_eq!(prediction.rent, 143199);
    }

    #[test]
    fn test_state_fallback() {
        let dataset = ReferenceDataset::global();
        let query = PropertyQuery::new("Maharashtra", "Nagpur", 5000.0, 10, 1, 0).unwrap();

        let prediction = strict_estimator().estimate(&query, dataset);
        let state = RentSummary::of(dataset.in_state("Maharashtra")).unwrap();

        assert_eq!(prediction.tier, Tier::StateAverage);
        assert_eq!(prediction.candidates, 3);
        assert_eq!(
            prediction.rent,
            (state.mean_rent / state.mean_size * 5000.0).round() as u64
        );
        assert_eq!(prediction.rent, 173035);
    }

    #[test]
    fn test_state_match_alone_is_similar_by_default() {
        let dataset = ReferenceDataset::global();
        let query = PropertyQuery::new("Maharashtra", "Nagpur", 5000.0, 10, 1, 0).unwrap();

        let prediction = Estimator::default().estimate(&query, dataset);
        assert_eq!(prediction.tier, Tier::Similarity);
        assert_eq!(prediction.candidates, 3);
        assert_eq!(prediction.rent, 175520);
    }

    #[test]
    fn test_size_without_location_is_similar() {
        let dataset = ReferenceDataset::global();
        let query = PropertyQuery::new("Goa", "Panaji", 1000.0, 2, 1, 0).unwrap();

        let prediction = Estimator::default().estimate(&query, dataset);
        assert_eq!(prediction.tier, Tier::Similarity);
        assert_eq!(prediction.candidates, 5);
        assert_eq!(prediction.rent, 45131);
    }

    #[test]
    fn test_doubling_size_doubles_rent() {
        let estimator = Estimator::default();
        let dataset = ReferenceDataset::global();
        // Far from every record size, so doubling keeps survivors and weights fixed.
        let query = PropertyQuery::new("Karnataka", "Bangalore", 5000.0, 4, 4, 2).unwrap();
        let doubled = query.with_size(10000.0).unwrap();

        let single = estimator.estimate(&query, dataset);
        let double = estimator.estimate(&doubled, dataset);

        assert_eq!(single.tier, Tier::Similarity);
        assert_eq!(single.candidates, double.candidates);
        assert!(double.rent.abs_diff(single.rent * 2) <= 1);
    }

    #[test]
    fn test_tiers_do_not_blend() {
        let dataset = ReferenceDataset::from_records(vec![
            ReferenceRecord::new("Goa", "Panaji", "Miramar", 1000.0, 2, 2, 1, 20000.0),
            ReferenceRecord::new("Assam", "Guwahati", "Dispur", 1000.0, 2, 1, 0, 90000.0),
        ])
        .unwrap();
        let query = PropertyQuery::new("Goa", "Panaji", 5000.0, 9, 9, 9).unwrap();

        let prediction = Estimator::default().estimate(&query, &dataset);
        assert_eq!(prediction.tier, Tier::Similarity);
        assert_eq!(prediction.candidates, 1);
        assert_eq!(prediction.rent, 100000);
    }

    #[test]
    fn test_largest_size_reports() {
        let query = bangalore_query().with_size(PropertyQuery::MAX_SIZE).unwrap();
        let prediction = Estimator::default().estimate(&query, ReferenceDataset::global());
        let report = crate::RentReport::new(&prediction, &query);

        assert!(prediction.rent > 0);
        assert_eq!(report.annual_rent, prediction.rent * 12);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = EstimatorConfig::default();
        config.weighting.parking = f64::NAN;
        assert!(Estimator::with_config(config).is_err());
    }

    #[test]
    fn test_estimate_rent() {
        let dataset = ReferenceDataset::global();
        assert_eq!(
            Estimator::global().estimate_rent(&bangalore_query(), dataset),
            51763
        );
    }
}
