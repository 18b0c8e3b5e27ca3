//! GCAM Ensemble: combinatorial scenario configuration generation
//!
//! Cross-products scenario parameters (SSP, RCP, adoption rate, technology, supply,
//! allocation) and, for each combination, clones a base GCAM configuration, patches
//! its scenario-specific fields, and appends the SSP's scenario components.

pub mod cli;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod generation;
pub mod logging;
pub mod scenario;
pub mod template;
