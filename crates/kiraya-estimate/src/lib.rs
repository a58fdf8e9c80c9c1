//! Similarity-weighted rent estimation for the kiraya rent estimator.
//!
//! This crate turns a [`PropertyQuery`](kiraya_types::PropertyQuery) and a
//! [`ReferenceDataset`](kiraya_dataset::ReferenceDataset) into a monthly rent:
//!
//! - [`Estimator`] - Runs the similarity, state-average and national-average tiers
//! - [`EstimatorConfig`] - Similarity scores, threshold and weights
//! - [`similarity_score`] / [`record_weight`] - Per-record scoring policy
//! - [`RentReport`] - Annual, per-sq-ft and segment figures for a prediction

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kiraya-rs/kiraya/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod estimator;
mod report;
mod scoring;
mod tier;

pub use config::{EstimatorConfig, SimilarityPolicy, WeightPolicy};
pub use estimator::{Comparable, Estimator};
pub use report::{MarketSegment, RentReport, format_inr};
pub use scoring::{is_similar, record_weight, similarity_score};
