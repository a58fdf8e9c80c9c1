//! Rust library for estimating monthly house rent from comparable listings.
//!
//! This is a facade crate that re-exports functionality from the kiraya
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use kiraya_lib::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let dataset = ReferenceDataset::global();
//! let query = PropertyQuery::new("Karnataka", "Bangalore", 1800.0, 4, 4, 2)?;
//!
//! let prediction = Estimator::global().estimate(&query, dataset);
//! println!("{} per month", format_inr(prediction.rent));
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kiraya-rs/kiraya/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kiraya_types::*;

// Re-export location registry
pub use kiraya_locations::{LocationRegistry, StateEntry};

// Re-export dataset
pub use kiraya_dataset::{ReferenceDataset, RentSummary};

// Re-export estimation
pub use kiraya_estimate::{
    Comparable, Estimator, EstimatorConfig, MarketSegment, RentReport, SimilarityPolicy,
    WeightPolicy, format_inr, is_similar, record_weight, similarity_score,
};

/// Prelude module for convenient imports.
///
/// ```
/// use kiraya_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kiraya_types::{
        KirayaError, Prediction, PropertyQuery, QueryError, ReferenceRecord, Result, Tier,
    };

    pub use kiraya_locations::LocationRegistry;

    pub use kiraya_dataset::{ReferenceDataset, RentSummary};

    pub use kiraya_estimate::{
        Comparable, Estimator, EstimatorConfig, MarketSegment, RentReport, format_inr,
    };
}
