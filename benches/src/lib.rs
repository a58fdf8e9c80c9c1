//! Benchmark fixtures for kiraya.

use kiraya_lib::prelude::*;

/// Builds a grid of queries covering every registered city, a spread of sizes
/// and bedroom counts, so that all three tiers are exercised.
pub fn query_grid() -> Vec<PropertyQuery> {
    let registry = LocationRegistry::global();
    let sizes = [450.0, 1200.0, 2400.0, 6000.0];
    let mut queries = Vec::new();

    for entry in registry.entries() {
        for city in &entry.cities {
            for size in sizes {
                for bedrooms in [1, 3, 5] {
                    if let Ok(query) =
                        PropertyQuery::new(&entry.state, city, size, bedrooms, 2, 1)
                    {
                        queries.push(query);
                    }
                }
            }
        }
    }

    queries
}

/// Builds a synthetic dataset of `len` records spread over the registered cities.
pub fn synthetic_dataset(len: usize) -> Result<ReferenceDataset> {
    let registry = LocationRegistry::global();
    let cities: Vec<(&str, &str)> = registry
        .entries()
        .iter()
        .flat_map(|e| e.cities.iter().map(move |c| (e.state.as_str(), c.as_str())))
        .collect();

    let records = (0..len)
        .map(|i| {
            let (state, city) = cities[i % cities.len()];
            let bedrooms = (i % 5) as u32 + 1;
            ReferenceRecord::new(
                state,
                city,
                "Synthetic",
                500.0 + (i * 37 % 2000) as f64,
                bedrooms,
                bedrooms.min(3),
                (i % 3) as u32,
                10_000.0 + (i * 7919 % 70_000) as f64,
            )
        })
        .collect();

    ReferenceDataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_grid_covers_all_tiers() {
        let estimator = Estimator::default();
        let dataset = ReferenceDataset::global();
        let queries = query_grid();

        assert!(!queries.is_empty());
        let tiers: Vec<Tier> = queries
            .iter()
            .map(|q| estimator.estimate(q, dataset).tier)
            .collect();
        assert!(tiers.contains(&Tier::Similarity));
        assert!(tiers.contains(&Tier::NationalAverage));
    }

    #[test]
    fn test_synthetic_dataset() {
        let dataset = synthetic_dataset(1000).unwrap();
        assert_eq!(dataset.len(), 1000);
        assert!(synthetic_dataset(0).is_err());
    }
}
