//! Core types for the kiraya rent estimator.
//!
//! This crate provides the fundamental data structures used throughout kiraya:
//!
//! - [`ReferenceRecord`] - A single historical rent observation
//! - [`PropertyQuery`] - Validated attributes of the property being priced
//! - [`Prediction`] - A rent estimate and the tier that produced it
//! - [`Tier`] - Fallback stage of the estimation algorithm

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kiraya-rs/kiraya/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod prediction;
mod query;
mod record;

pub use error::{KirayaError, QueryError, Result};
pub use prediction::{Prediction, Tier};
pub use query::PropertyQuery;
pub use record::ReferenceRecord;
