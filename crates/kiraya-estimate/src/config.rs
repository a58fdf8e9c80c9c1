//! Estimator configuration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use kiraya_types::{KirayaError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// File name of the estimator configuration inside the config directory.
const CONFIG_FILE_NAME: &str = "estimator.json";

/// Points used to decide whether a reference record is similar to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityPolicy {
    /// Points for an exact state match.
    pub state_points: u32,
    /// Points for an exact city match.
    pub city_points: u32,
    /// Points when sizes are within `size_tolerance`.
    pub size_points: u32,
    /// Largest size difference (inclusive) that earns `size_points`.
    pub size_tolerance: f64,
    /// Points when bedroom counts are within `bedroom_tolerance`.
    pub bedroom_points: u32,
    /// Largest bedroom difference (inclusive) that earns `bedroom_points`.
    pub bedroom_tolerance: u32,
    /// Minimum score for a record to count as similar.
    pub threshold: u32,
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self {
            state_points: 3,
            city_points: 5,
            size_points: 2,
            size_tolerance: 500.0,
            bedroom_points: 1,
            bedroom_tolerance: 1,
            threshold: 3,
        }
    }
}

/// Per-record weights used by the similarity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightPolicy {
    /// Starting weight of every similar record.
    pub base: f64,
    /// Added for an exact state match.
    pub state: f64,
    /// Added for an exact city match.
    pub city: f64,
    /// Added when sizes are within `size_band`.
    pub size: f64,
    /// Largest size difference (inclusive) that earns the `size` bonus.
    pub size_band: f64,
    /// Added for an exact bedroom match.
    pub bedrooms: f64,
    /// Added for an exact bathroom match.
    pub bathrooms: f64,
    /// Added for an exact parking match.
    pub parking: f64,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            base: 1.0,
            state: 0.3,
            city: 0.5,
            size: 0.2,
            size_band: 200.0,
            bedrooms: 0.1,
            bathrooms: 0.1,
            parking: 0.1,
        }
    }
}

/// Complete estimator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Similarity filter settings.
    pub similarity: SimilarityPolicy,
    /// Weighted-average settings.
    pub weighting: WeightPolicy,
}

impl EstimatorConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the values fail [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded estimator config");
        Ok(config)
    }

    /// Returns the platform config file location, e.g.
    /// `~/.config/kiraya/estimator.json` on Linux.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kiraya").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves the configuration: an explicit path must load, otherwise the
    /// platform config file is used if present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                debug!("no estimator config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks that weights and tolerances are usable.
    ///
    /// The base weight and every increment must be positive so that matching
    /// one more attribute always raises a record's weight. Tolerances may be
    /// zero, which means an exact match.
    ///
    /// # Errors
    ///
    /// Returns [`KirayaError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weighting;
        let positive = [
            ("weighting.base", w.base),
            ("weighting.state", w.state),
            ("weighting.city", w.city),
            ("weighting.size", w.size),
            ("weighting.bedrooms", w.bedrooms),
            ("weighting.bathrooms", w.bathrooms),
            ("weighting.parking", w.parking),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(KirayaError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let tolerances = [
            ("weighting.size_band", w.size_band),
            ("similarity.size_tolerance", self.similarity.size_tolerance),
        ];
        for (name, value) in tolerances {
            if !(value.is_finite() && value >= 0.0) {
                return Err(KirayaError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
