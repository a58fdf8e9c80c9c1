//! Dataset command implementation.
//!
//! This module handles displaying the reference records and their per-state
//! and national averages.

use crate::display::{load_dataset, truncate};
use anyhow::{Result, bail};
use kiraya_lib::prelude::*;
use std::path::Path;

/// Show the reference dataset, optionally limited to one state.
pub(crate) async fn show_dataset(path: Option<&Path>, state: Option<&str>) -> Result<()> {
    let dataset = load_dataset(path).await?;

    let records: Vec<&ReferenceRecord> = match state {
        Some(state) => {
            let matching: Vec<_> = dataset
                .iter()
                .filter(|r| r.state.eq_ignore_ascii_case(state.trim()))
                .collect();
            if matching.is_empty() {
                bail!("No reference records for state: {state}");
            }
            matching
        }
        None => dataset.iter().collect(),
    };

    println!(
        "{:<18} {:<16} {:<18} {:>7} {:>9} {:>12}",
        "STATE", "CITY", "LOCATION", "SQ FT", "BD/BA/P", "RENT"
    );
    println!("{}", "-".repeat(85));
    for record in &records {
        println!(
            "{:<18} {:<16} {:<18} {:>7} {:>9} {:>12}",
            truncate(&record.state, 18),
            truncate(&record.city, 16),
            truncate(&record.location, 18),
            record.size,
            format!("{}/{}/{}", record.bedrooms, record.bathrooms, record.parking),
            format_inr(record.rent.round() as u64),
        );
    }

    println!("\nAverages:");
    println!(
        "{:<18} {:>8} {:>12} {:>10} {:>12}",
        "STATE", "RECORDS", "MEAN RENT", "MEAN SQFT", "RENT/SQFT"
    );
    println!("{}", "-".repeat(64));
    for (name, summary) in dataset.state_summaries() {
        if state.is_some_and(|s| !name.eq_ignore_ascii_case(s.trim())) {
            continue;
        }
        print_summary(name, &summary);
    }
    print_summary("National", dataset.national_summary());

    println!("\nTotal: {} of {} records", records.len(), dataset.len());
    Ok(())
}

fn print_summary(name: &str, summary: &RentSummary) {
    println!(
        "{:<18} {:>8} {:>12} {:>10.0} {:>12.2}",
        truncate(name, 18),
        summary.count,
        format_inr(summary.mean_rent.round() as u64),
        summary.mean_size,
        summary.rent_per_area_unit(),
    );
}
