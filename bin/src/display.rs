//! Display utilities and shared loading for the kiraya CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use kiraya_lib::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Output format for estimates.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// JSON document printed by `estimate --format json`.
#[derive(Serialize)]
pub(crate) struct EstimateOutput<'a> {
    pub(crate) query: &'a PropertyQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<&'a str>,
    pub(crate) report: &'a RentReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comparables: Option<&'a [Comparable<'a>]>,
}

/// Load the dataset from `path`, or the embedded sample when no path is given.
pub(crate) async fn load_dataset(path: Option<&Path>) -> Result<ReferenceDataset> {
    let dataset = match path {
        Some(path) => ReferenceDataset::load(path)
            .await
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => {
            debug!("using embedded reference dataset");
            ReferenceDataset::global().clone()
        }
    };
    info!(records = dataset.len(), "reference dataset ready");
    Ok(dataset)
}

/// Build an estimator from the resolved configuration.
pub(crate) fn load_estimator(config_path: Option<&Path>) -> Result<Estimator> {
    let config = EstimatorConfig::resolve(config_path).context("Failed to load estimator config")?;
    info!(threshold = config.similarity.threshold, "estimator config ready");
    Ok(Estimator::with_config(config)?)
}

/// Print the property summary and the report as text.
pub(crate) fn print_report(query: &PropertyQuery, location: Option<&str>, report: &RentReport) {
    match location {
        Some(location) => println!("Property: {location}, {}, {}", query.city(), query.state()),
        None => println!("Property: {}, {}", query.city(), query.state()),
    }

    let mut details = format!(
        "{} sq ft | {} bed | {} bath",
        query.size(),
        query.bedrooms(),
        query.bathrooms()
    );
    if query.parking() > 0 {
        details.push_str(&format!(" | {} parking", query.parking()));
    }
    println!("          {details}");
    println!("{}", "-".repeat(60));
    println!("{}", report.format_report());
}

/// Print the comparable records behind a similarity estimate.
pub(crate) fn print_comparables(comparables: &[Comparable<'_>]) {
    if comparables.is_empty() {
        println!("\nNo comparable records reached the similarity threshold.");
        return;
    }

    println!("\nComparable records:");
    println!(
        "{:<28} {:>7} {:>9} {:>12} {:>6} {:>7}",
        "LOCATION", "SQ FT", "BD/BA/P", "RENT", "SCORE", "WEIGHT"
    );
    println!("{}", "-".repeat(74));

    for comparable in comparables {
        let record = comparable.record;
        println!(
            "{:<28} {:>7} {:>9} {:>12} {:>6} {:>7.2}",
            truncate(&format!("{}, {}", record.location, record.city), 28),
            record.size,
            format!("{}/{}/{}", record.bedrooms, record.bathrooms, record.parking),
            format_inr(record.rent.round() as u64),
            comparable.score,
            comparable.weight,
        );
    }
}

/// Truncate a string to at most `max` characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_embedded_dataset() {
        let dataset = load_dataset(None).await.unwrap();
        assert_eq!(dataset.len(), ReferenceDataset::global().len());
    }

    #[tokio::test]
    async fn test_load_missing_dataset() {
        let path = std::env::temp_dir().join("kiraya-missing-dataset.csv");
        assert!(load_dataset(Some(&path)).await.is_err());
    }
}
