//! Domain Services - Operations over token documents
//!
//! The candidate path tables describe where each token may live in an
//! external document; the resolver walks them and backfills defaults.

pub mod candidate_paths;
pub mod token_resolver;

pub use candidate_paths::CandidatePaths;
pub use token_resolver::{merge_with_defaults, pick_token, resolve, resolve_complete, TokenResolver};
