//! Registry of known states and cities for the kiraya rent estimator.
//!
//! The registry mirrors the locations offered by the property form: every
//! state with the cities listed for it, in display order.
//!
//! # Example
//!
//! ```
//! use kiraya_locations::LocationRegistry;
//!
//! let registry = LocationRegistry::global();
//!
//! if let Some(cities) = registry.cities("karnataka") {
//!     println!("{}", cities.join(", "));
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kiraya-rs/kiraya/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use kiraya_types::{KirayaError, Result};
use serde::{Deserialize, Serialize};

/// The location JSON embedded at compile time.
const LOCATIONS_JSON: &str = include_str!("../data/locations.json");

/// Global location registry instance.
static REGISTRY: OnceLock<LocationRegistry> = OnceLock::new();

/// A state and the cities listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// State name.
    pub state: String,
    /// Cities in the state.
    pub cities: Vec<String>,
}

/// Registry of supported states and cities.
#[derive(Debug)]
pub struct LocationRegistry {
    states: Vec<StateEntry>,
}

impl LocationRegistry {
    /// Returns the global location registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads locations from the embedded JSON data.
    fn load() -> Self {
        Self::from_json(LOCATIONS_JSON).expect("Invalid locations.json")
    }

    /// Creates a registry from a JSON array of state entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let states: Vec<StateEntry> = serde_json::from_str(json)?;
        Ok(Self { states })
    }

    /// Returns all state names in display order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|entry| entry.state.as_str())
    }

    /// Returns all state entries.
    #[must_use]
    pub fn entries(&self) -> &[StateEntry] {
        &self.states
    }

    /// Returns the number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Looks up a state entry by name (case-insensitive).
    #[must_use]
    pub fn get(&self, state: &str) -> Option<&StateEntry> {
        let state = state.trim();
        self.states
            .iter()
            .find(|entry| entry.state.eq_ignore_ascii_case(state))
    }

    /// Returns the cities listed for a state (case-insensitive).
    #[must_use]
    pub fn cities(&self, state: &str) -> Option<&[String]> {
        self.get(state).map(|entry| entry.cities.as_slice())
    }

    /// Returns the stored spelling of a state name.
    #[must_use]
    pub fn canonical_state(&self, state: &str) -> Option<&str> {
        self.get(state).map(|entry| entry.state.as_str())
    }

    /// Returns the stored spelling of a city within a state.
    #[must_use]
    pub fn canonical_city(&self, state: &str, city: &str) -> Option<&str> {
        let city = city.trim();
        self.cities(state)?
            .iter()
            .find(|c| c.eq_ignore_ascii_case(city))
            .map(String::as_str)
    }

    /// Validates a state/city pair, returning both in canonical spelling.
    ///
    /// # Errors
    ///
    /// Returns [`KirayaError::UnknownState`] or [`KirayaError::UnknownCity`].
    pub fn validate(&self, state: &str, city: &str) -> Result<(&str, &str)> {
        let canonical_state = self
            .canonical_state(state)
            .ok_or_else(|| KirayaError::UnknownState(state.trim().to_string()))?;
        let canonical_city =
            self.canonical_city(state, city)
                .ok_or_else(|| KirayaError::UnknownCity {
                    state: canonical_state.to_string(),
                    city: city.trim().to_string(),
                })?;
        Ok((canonical_state, canonical_city))
    }

    /// Searches states by state or city name (case-insensitive substring).
    pub fn search(&self, pattern: &str) -> Vec<&StateEntry> {
        let pattern = pattern.to_lowercase();
        self.states
            .iter()
            .filter(|entry| {
                entry.state.to_lowercase().contains(&pattern)
                    || entry
                        .cities
                        .iter()
                        .any(|c| c.to_lowercase().contains(&pattern))
            })
            .collect()
    }
}
