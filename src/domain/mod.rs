//! Domain Layer - Pure token logic with no I/O
//!
//! This layer contains:
//! - **Entities**: The design token categories and the aggregate token set
//! - **Value Objects**: Document traversal, value coercion, CSS values
//! - **Repository Interfaces**: Where external token documents come from
//! - **Domain Services**: Candidate path tables and the token resolver
//! - **Domain Errors**: Error types for loading documents

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
