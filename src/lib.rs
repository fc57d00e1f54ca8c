//! Lead query engine for TV advertising attribution.
//!
//! Filters, sorts and explains a fixed set of CRM leads against the TV spots
//! they may have responded to. Everything here is a pure function over
//! immutable data; the binary is a thin presentation layer on top.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod journey;
pub mod leads;
pub mod metrics;
pub mod output;
pub mod scoring;

pub use engine::{LeadDetail, LeadQueryEngine};
pub use error::QueryError;
