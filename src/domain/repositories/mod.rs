//! Domain Repository Interfaces
//!
//! These are trait definitions only - no filesystem access.
//! Implementations belong in the adapters/gateways layer.

pub mod token_repository;

pub use token_repository::{NullTokenSource, StaticTokenSource, TokenSource};
