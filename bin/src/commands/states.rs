//! States command implementation.
//!
//! This module handles listing supported states and their cities.

use anyhow::Result;
use kiraya_lib::prelude::*;

/// List supported states with an optional search pattern.
pub(crate) fn list_states(search: Option<&str>) -> Result<()> {
    let registry = LocationRegistry::global();

    let entries: Vec<_> = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.entries().iter().collect(),
    };

    if entries.is_empty() {
        println!("No states found.");
        return Ok(());
    }

    println!("{:<20} {:<40}", "STATE", "CITIES");
    println!("{}", "-".repeat(60));

    for entry in &entries {
        println!("{:<20} {:<40}", entry.state, entry.cities.join(", "));
    }

    println!("\nTotal: {} states", entries.len());
    Ok(())
}
