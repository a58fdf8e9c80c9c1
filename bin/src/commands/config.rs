//! Config command implementation.

use anyhow::{Context, Result};
use kiraya_lib::prelude::*;
use std::path::Path;

/// Print the effective estimator configuration and where it came from.
pub(crate) fn show_config(explicit: Option<&Path>) -> Result<()> {
    let source = match (explicit, EstimatorConfig::default_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        (None, Some(path)) => format!("built-in defaults (no file at {})", path.display()),
        (None, None) => "built-in defaults".to_string(),
    };

    let config = EstimatorConfig::resolve(explicit).context("Failed to load estimator config")?;

    eprintln!("Source: {source}");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
