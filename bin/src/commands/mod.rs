//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod dataset;
pub(crate) mod estimate;
pub(crate) mod states;
