//! Application Layer - builds the shared theme from a token source
//!
//! - **Services**: `ThemeContext`, the resolved, immutable token set
//! - **DTOs**: summaries of a resolution for logging and diagnostics

pub mod dto;
pub mod services;

pub use dto::ThemeDto;
pub use services::ThemeContext;
