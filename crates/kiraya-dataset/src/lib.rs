//! Reference rent dataset loading for the kiraya rent estimator.
//!
//! This crate provides the comparison basis for estimates:
//!
//! - [`ReferenceDataset`] - Validated, read-only collection of rent observations
//! - [`RentSummary`] - Mean rent and size over a group of records

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kiraya-rs/kiraya/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod summary;

pub use dataset::ReferenceDataset;
pub use summary::RentSummary;
