//! Adapters Layer - token sources and output formatting
//!
//! - **Gateways**: load external token documents
//! - **Presenters**: turn a resolved token set into CSS or component config

pub mod gateways;
pub mod presenters;
