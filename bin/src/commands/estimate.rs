//! Estimate command implementation.
//!
//! This module collects property details from flags or interactive prompts,
//! validates them against the location registry and prints the rent report.

use crate::display::{
    EstimateOutput, OutputFormat, load_dataset, load_estimator, print_comparables, print_report,
};
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomType, Select, Text};
use kiraya_lib::prelude::*;
use std::path::Path;

/// Bedroom and bathroom choices offered by the prompts.
const ROOM_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];

/// Parking choices offered by the prompts.
const PARKING_CHOICES: [u32; 3] = [0, 1, 2];

/// Property details as entered by the user, before validation.
#[derive(Debug, Default)]
pub(crate) struct PropertyInput {
    pub(crate) state: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) size: Option<f64>,
    pub(crate) bedrooms: u32,
    pub(crate) bathrooms: u32,
    pub(crate) parking: u32,
}

impl PropertyInput {
    /// Returns true if a required field is missing.
    const fn is_incomplete(&self) -> bool {
        self.state.is_none() || self.city.is_none() || self.size.is_none()
    }
}

/// Estimate the rent for a property and print the report.
pub(crate) async fn estimate(
    input: PropertyInput,
    interactive: bool,
    dataset_path: Option<&Path>,
    config_path: Option<&Path>,
    explain: bool,
    format: OutputFormat,
) -> Result<()> {
    let dataset = load_dataset(dataset_path).await?;
    let estimator = load_estimator(config_path)?;

    let input = if interactive || input.is_incomplete() {
        prompt_property(input)?
    } else {
        input
    };

    let registry = LocationRegistry::global();
    let state = input.state.as_deref().context("State is required")?;
    let city = input.city.as_deref().context("City is required")?;
    let (state, city) = registry.validate(state, city)?;
    let size = input.size.context("Size is required")?;

    let query = PropertyQuery::new(
        state,
        city,
        size,
        input.bedrooms,
        input.bathrooms,
        input.parking,
    )
    .context("Invalid property details")?;

    let prediction = estimator.estimate(&query, &dataset);
    let report = RentReport::new(&prediction, &query);
    let comparables = explain.then(|| estimator.comparables(&query, &dataset));
    let location = input.location.as_deref().filter(|l| !l.trim().is_empty());

    match format {
        OutputFormat::Text => {
            print_report(&query, location, &report);
            if let Some(comparables) = &comparables {
                print_comparables(comparables);
            }
        }
        OutputFormat::Json => {
            let output = EstimateOutput {
                query: &query,
                location,
                report: &report,
                comparables: comparables.as_deref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Prompt for every property field, using values already given as defaults.
fn prompt_property(input: PropertyInput) -> Result<PropertyInput> {
    let registry = LocationRegistry::global();

    let states: Vec<&str> = registry.states().collect();
    let state_cursor = input
        .state
        .as_deref()
        .and_then(|s| registry.canonical_state(s))
        .and_then(|s| states.iter().position(|candidate| *candidate == s))
        .unwrap_or(0);
    let state = Select::new("State:", states)
        .with_starting_cursor(state_cursor)
        .prompt()
        .context("State selection cancelled")?;

    let cities = registry
        .cities(state)
        .with_context(|| format!("No cities listed for {state}"))?
        .to_vec();
    let city_cursor = input
        .city
        .as_deref()
        .and_then(|c| cities.iter().position(|candidate| candidate.eq_ignore_ascii_case(c.trim())))
        .unwrap_or(0);
    let city = Select::new("City:", cities)
        .with_starting_cursor(city_cursor)
        .prompt()
        .context("City selection cancelled")?;

    let location = Text::new("Location (optional):")
        .prompt_skippable()
        .context("Location entry cancelled")?
        .filter(|l| !l.trim().is_empty())
        .or(input.location);

    let mut size_prompt = CustomType::<f64>::new("Size (sq ft):")
        .with_error_message("Please enter a number")
        .with_validator(|size: &f64| {
            if *size <= 0.0 {
                Ok(Validation::Invalid("Size must be greater than zero".into()))
            } else if *size > PropertyQuery::MAX_SIZE {
                Ok(Validation::Invalid(
                    format!("Size must be at most {} sq ft", PropertyQuery::MAX_SIZE).into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        });
    if let Some(size) = input.size {
        size_prompt = size_prompt.with_default(size);
    }
    let size = size_prompt.prompt().context("Size entry cancelled")?;

    let bedrooms = prompt_count("Bedrooms:", &ROOM_CHOICES, input.bedrooms)?;
    let bathrooms = prompt_count("Bathrooms:", &ROOM_CHOICES, input.bathrooms)?;
    let parking = prompt_count("Parking spaces:", &PARKING_CHOICES, input.parking)?;

    Ok(PropertyInput {
        state: Some(state.to_string()),
        city: Some(city),
        location,
        size: Some(size),
        bedrooms,
        bathrooms,
        parking,
    })
}

/// Prompt for a small count, starting on `current` when it is one of the choices.
fn prompt_count(message: &str, choices: &[u32], current: u32) -> Result<u32> {
    let cursor = choices.iter().position(|c| *c == current).unwrap_or(0);
    Select::new(message, choices.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
        .with_context(|| format!("{} cancelled", message.trim_end_matches(':')))
}
