//! ThemeContext - the resolved token set shared with rendering code
//!
//! Built once at startup from a token source and then only read. Clones
//! share the same allocation, so the context can be handed to any number
//! of consumers without locking.

use std::sync::Arc;

use serde_json::Value;

use crate::application::dto::ThemeDto;
use crate::domain::entities::DesignTokens;
use crate::domain::repositories::TokenSource;
use crate::domain::services::TokenResolver;

/// Immutable, cheaply cloneable resolved theme
#[derive(Clone, Debug)]
pub struct ThemeContext {
    tokens: Arc<DesignTokens>,
    summary: ThemeDto,
}

impl ThemeContext {
    /// Load the document from `source` and resolve it against `defaults`.
    ///
    /// A source that fails to load is treated as an empty document.
    pub fn from_source(source: &dyn TokenSource, defaults: &DesignTokens) -> Self {
        crate::log!("Building theme from {}", source.describe());
        let document = source.load_or_empty();
        Self::from_document(&document, defaults)
    }

    /// Resolve an in-memory document against `defaults`
    pub fn from_document(document: &Value, defaults: &DesignTokens) -> Self {
        let resolver = TokenResolver::with_defaults(defaults.clone());
        let resolved = resolver.resolve(document);
        let tokens = defaults.merged(&resolved);

        Self {
            tokens: Arc::new(tokens),
            summary: ThemeDto::from_partial(&resolved),
        }
    }

    /// The complete token set
    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    /// Shared handle to the token set
    pub fn shared(&self) -> Arc<DesignTokens> {
        Arc::clone(&self.tokens)
    }

    /// How many keys the external document supplied
    pub fn summary(&self) -> &ThemeDto {
        &self.summary
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::from_document(&Value::Null, &DesignTokens::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{NullTokenSource, StaticTokenSource};
    use serde_json::json;

    #[test]
    fn test_default_context_is_defaults() {
        let ctx = ThemeContext::default();
        assert_eq!(ctx.tokens(), &DesignTokens::default());
        assert_eq!(ctx.summary().total(), 0);
    }

    #[test]
    fn test_from_source() {
        let source = StaticTokenSource::new(json!({ "radius": { "sm": 2 } }));
        let ctx = ThemeContext::from_source(&source, &DesignTokens::default());
        assert_eq!(ctx.tokens().border_radius.sm, "2px");
        assert_eq!(ctx.summary().border_radius, 1);
    }

    #[test]
    fn test_null_source_gives_defaults() {
        let ctx = ThemeContext::from_source(&NullTokenSource, &DesignTokens::default());
        assert_eq!(ctx.tokens(), &DesignTokens::default());
    }

    #[test]
    fn test_clones_share_tokens() {
        let ctx = ThemeContext::from_document(&json!({ "colors": { "error": "red" } }), &DesignTokens::default());
        let other = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.shared(), &other.shared()));
        assert_eq!(other.tokens().colors.error, "red");
    }
}
