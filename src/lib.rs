//! Design token resolution
//!
//! Takes a loosely structured token document (JSON, any of several naming
//! and nesting conventions, optionally `{ "$value": .. }` wrapped leaves)
//! and produces a complete, typed [`DesignTokens`] set. Keys the document
//! does not provide are backfilled from the compiled-in defaults.
//!
//! ```
//! use design_tokens::{resolve_complete, DesignTokens};
//! use serde_json::json;
//!
//! let doc = json!({ "color": { "primary": "#112233" }, "spacing": { "md": 20 } });
//! let tokens = resolve_complete(&doc, &DesignTokens::default());
//! assert_eq!(tokens.colors.primary, "#112233");
//! assert_eq!(tokens.spacing.md, "20px");
//! ```

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod shared;

pub use adapters::gateways::FileTokenGateway;
pub use adapters::presenters::{ComponentThemeConfig, ThemePresenter};
pub use application::{ThemeContext, ThemeDto};
pub use domain::entities::{DesignTokens, PartialDesignTokens};
pub use domain::errors::DomainError;
pub use domain::repositories::{NullTokenSource, StaticTokenSource, TokenSource};
pub use domain::services::{merge_with_defaults, resolve, resolve_complete, TokenResolver};
pub use shared::{AppConfig, OutputFormat};
