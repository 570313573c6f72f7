//! TokenResolver - maps loosely structured token documents onto the
//! canonical design token set
//!
//! Resolution never fails. A key whose candidate paths all miss (or hold
//! values that do not coerce) is left unset and later backfilled from the
//! defaults.

use serde_json::Value;

use crate::domain::entities::{
    DesignTokens, PartialBorderRadiusTokens, PartialColorTokens, PartialDesignTokens,
    PartialShadowTokens, PartialSpacingTokens, PartialTypographyTokens,
};
use crate::domain::services::candidate_paths::{self as paths, CandidatePaths};
use crate::domain::value_objects::{as_css_length, as_font_weight, as_token_string, get_by_path};

/// Try each candidate path in order and return the first value that coerces
pub fn pick_token<T>(
    source: &Value,
    paths: CandidatePaths,
    parse_value: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .filter_map(|path| get_by_path(source, path))
        .find_map(parse_value)
}

/// Wrap a category in `Some` only when at least one key resolved
fn non_empty<T>(category: T, is_empty: impl Fn(&T) -> bool) -> Option<T> {
    if is_empty(&category) {
        None
    } else {
        Some(category)
    }
}

/// Resolve every semantic key the document provides.
///
/// Any JSON value is accepted; `null`, arrays and scalars resolve to an
/// empty result.
pub fn resolve(source: &Value) -> PartialDesignTokens {
    let colors = PartialColorTokens {
        primary: pick_token(source, paths::colors::PRIMARY, as_token_string),
        primary_hover: pick_token(source, paths::colors::PRIMARY_HOVER, as_token_string),
        secondary: pick_token(source, paths::colors::SECONDARY, as_token_string),
        background: pick_token(source, paths::colors::BACKGROUND, as_token_string),
        surface: pick_token(source, paths::colors::SURFACE, as_token_string),
        sidebar: pick_token(source, paths::colors::SIDEBAR, as_token_string),
        sidebar_hover: pick_token(source, paths::colors::SIDEBAR_HOVER, as_token_string),
        text: pick_token(source, paths::colors::TEXT, as_token_string),
        text_secondary: pick_token(source, paths::colors::TEXT_SECONDARY, as_token_string),
        border: pick_token(source, paths::colors::BORDER, as_token_string),
        success: pick_token(source, paths::colors::SUCCESS, as_token_string),
        warning: pick_token(source, paths::colors::WARNING, as_token_string),
        error: pick_token(source, paths::colors::ERROR, as_token_string),
    };

    let spacing = PartialSpacingTokens {
        xs: pick_token(source, paths::spacing::XS, as_css_length),
        sm: pick_token(source, paths::spacing::SM, as_css_length),
        md: pick_token(source, paths::spacing::MD, as_css_length),
        lg: pick_token(source, paths::spacing::LG, as_css_length),
        xl: pick_token(source, paths::spacing::XL, as_css_length),
        xxl: pick_token(source, paths::spacing::XXL, as_css_length),
    };

    let border_radius = PartialBorderRadiusTokens {
        sm: pick_token(source, paths::border_radius::SM, as_css_length),
        md: pick_token(source, paths::border_radius::MD, as_css_length),
        lg: pick_token(source, paths::border_radius::LG, as_css_length),
    };

    let typography = PartialTypographyTokens {
        font_family: pick_token(source, paths::typography::FONT_FAMILY, as_token_string),
        font_size_sm: pick_token(source, paths::typography::FONT_SIZE_SM, as_css_length),
        font_size_base: pick_token(source, paths::typography::FONT_SIZE_BASE, as_css_length),
        font_size_lg: pick_token(source, paths::typography::FONT_SIZE_LG, as_css_length),
        line_height_base: pick_token(source, paths::typography::LINE_HEIGHT_BASE, as_token_string),
        line_height_heading: pick_token(source, paths::typography::LINE_HEIGHT_HEADING, as_token_string),
        font_weight_regular: pick_token(source, paths::typography::FONT_WEIGHT_REGULAR, as_font_weight),
        font_weight_medium: pick_token(source, paths::typography::FONT_WEIGHT_MEDIUM, as_font_weight),
        font_weight_bold: pick_token(source, paths::typography::FONT_WEIGHT_BOLD, as_font_weight),
        heading1_size: pick_token(source, paths::typography::HEADING1_SIZE, as_css_length),
        heading2_size: pick_token(source, paths::typography::HEADING2_SIZE, as_css_length),
    };

    let shadows = PartialShadowTokens {
        sm: pick_token(source, paths::shadows::SM, as_token_string),
        md: pick_token(source, paths::shadows::MD, as_token_string),
        lg: pick_token(source, paths::shadows::LG, as_token_string),
    };

    PartialDesignTokens {
        colors: non_empty(colors, PartialColorTokens::is_empty),
        spacing: non_empty(spacing, PartialSpacingTokens::is_empty),
        border_radius: non_empty(border_radius, PartialBorderRadiusTokens::is_empty),
        typography: non_empty(typography, PartialTypographyTokens::is_empty),
        shadows: non_empty(shadows, PartialShadowTokens::is_empty),
    }
}

/// Overlay resolved keys onto the defaults, key by key
pub fn merge_with_defaults(defaults: &DesignTokens, resolved: &PartialDesignTokens) -> DesignTokens {
    defaults.merged(resolved)
}

/// Resolve and backfill: always returns a complete token set
pub fn resolve_complete(source: &Value, defaults: &DesignTokens) -> DesignTokens {
    merge_with_defaults(defaults, &resolve(source))
}

/// Service for resolving token documents against a fixed default table
#[derive(Clone, Debug, Default)]
pub struct TokenResolver {
    /// Values used for any key the document does not supply
    defaults: DesignTokens,
}

impl TokenResolver {
    /// Create a resolver backed by the compiled-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom default table
    pub fn with_defaults(defaults: DesignTokens) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &DesignTokens {
        &self.defaults
    }

    /// Resolve only what the document provides
    pub fn resolve(&self, source: &Value) -> PartialDesignTokens {
        let resolved = resolve(source);
        crate::log!(
            "Resolved tokens: colors={} spacing={} borderRadius={} typography={} shadows={}",
            resolved.colors.as_ref().map_or(0, |c| c.resolved_count()),
            resolved.spacing.as_ref().map_or(0, |c| c.resolved_count()),
            resolved.border_radius.as_ref().map_or(0, |c| c.resolved_count()),
            resolved.typography.as_ref().map_or(0, |c| c.resolved_count()),
            resolved.shadows.as_ref().map_or(0, |c| c.resolved_count())
        );
        resolved
    }

    /// Resolve and backfill from this resolver's defaults
    pub fn resolve_complete(&self, source: &Value) -> DesignTokens {
        merge_with_defaults(&self.defaults, &self.resolve(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FontWeight;
    use serde_json::json;

    #[test]
    fn test_resolve_empty_document() {
        assert!(resolve(&json!({})).is_empty());
        assert!(resolve(&Value::Null).is_empty());
        assert!(resolve(&json!([1, 2, 3])).is_empty());
        assert!(resolve(&json!("tokens")).is_empty());
    }

    #[test]
    fn test_defaults_backfill_everything() {
        let defaults = DesignTokens::default();
        assert_eq!(resolve_complete(&json!({}), &defaults), defaults);
        assert_eq!(resolve_complete(&Value::Null, &defaults), defaults);
    }

    #[test]
    fn test_scenario_color_and_spacing() {
        let doc = json!({ "color": { "primary": "#112233" }, "spacing": { "md": 20 } });
        let defaults = DesignTokens::default();
        let tokens = resolve_complete(&doc, &defaults);

        assert_eq!(tokens.colors.primary, "#112233");
        assert_eq!(tokens.spacing.md, "20px");

        let mut expected = defaults.clone();
        expected.colors.primary = "#112233".to_string();
        expected.spacing.md = "20px".to_string();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_first_candidate_wins() {
        let doc = json!({
            "colors": { "primary": "#000001" },
            "color": { "primary": "#000002" }
        });
        assert_eq!(
            resolve(&doc).colors.unwrap().primary,
            Some("#000001".to_string())
        );
    }

    #[test]
    fn test_later_candidate_used_when_earlier_invalid() {
        let doc = json!({
            "colors": { "primary": { "foo": 1 } },
            "tokens": { "color": { "primary": "#abcdef" } }
        });
        assert_eq!(
            resolve(&doc).colors.unwrap().primary,
            Some("#abcdef".to_string())
        );
    }

    #[test]
    fn test_invalid_value_skips_key_not_siblings() {
        let doc = json!({
            "colors": { "primary": { "foo": 1 }, "secondary": "#00ff00" }
        });
        let defaults = DesignTokens::default();
        let tokens = resolve_complete(&doc, &defaults);
        assert_eq!(tokens.colors.primary, defaults.colors.primary);
        assert_eq!(tokens.colors.secondary, "#00ff00");
    }

    #[test]
    fn test_unwrapped_values_resolve_like_bare() {
        let bare = resolve(&json!({ "spacing": { "sm": "8px" } }));
        let wrapped = resolve(&json!({ "spacing": { "sm": { "value": "8px" } } }));
        let nested = resolve(&json!({ "spacing": { "sm": { "$value": { "value": "8px" } } } }));
        assert_eq!(bare, wrapped);
        assert_eq!(bare, nested);
    }

    #[test]
    fn test_length_coercion() {
        let doc = json!({ "spacing": { "xs": 8, "sm": "0.5rem" } });
        let spacing = resolve(&doc).spacing.unwrap();
        assert_eq!(spacing.xs, Some("8px".to_string()));
        assert_eq!(spacing.sm, Some("0.5rem".to_string()));
    }

    #[test]
    fn test_numeric_spacing_aliases() {
        let doc = json!({ "space": { "2": 2, "4": "4px", "12": 48 } });
        let spacing = resolve(&doc).spacing.unwrap();
        assert_eq!(spacing.xs, Some("2px".to_string()));
        assert_eq!(spacing.sm, Some("4px".to_string()));
        assert_eq!(spacing.xxl, Some("48px".to_string()));
        assert_eq!(spacing.md, None);
    }

    #[test]
    fn test_font_weights() {
        let doc = json!({
            "typography": {
                "heading": { "fontWeight": "Bold" },
                "subtitle": { "value": { "fontWeight": "medium" } },
                "fontWeightRegular": 650
            }
        });
        let typography = resolve(&doc).typography.unwrap();
        assert_eq!(typography.font_weight_bold, Some(FontWeight(700.0)));
        assert_eq!(typography.font_weight_medium, Some(FontWeight(500.0)));
        assert_eq!(typography.font_weight_regular, Some(FontWeight(650.0)));
    }

    #[test]
    fn test_design_token_interchange_format() {
        let doc = json!({
            "color": {
                "primary": { "$value": "#123456", "$type": "color" },
                "text": { "secondary": { "$value": "#999999" } }
            },
            "radius": { "md": { "$value": 10, "$type": "dimension" } },
            "shadow": { "lg": { "$value": "0 8px 24px rgba(0,0,0,.2)" } },
            "font": {
                "family": { "base": { "$value": "Inter, sans-serif" } },
                "size": { "h1": { "$value": "2.5rem" } },
                "lineHeight": { "base": { "$value": 1.6 } }
            }
        });
        let tokens = resolve_complete(&doc, &DesignTokens::default());
        assert_eq!(tokens.colors.primary, "#123456");
        assert_eq!(tokens.border_radius.md, "10px");
        assert_eq!(tokens.shadows.lg, "0 8px 24px rgba(0,0,0,.2)");
        assert_eq!(tokens.typography.font_family, "Inter, sans-serif");
        assert_eq!(tokens.typography.heading1_size, "2.5rem");
        assert_eq!(tokens.typography.line_height_base, "1.6");
        // `colors.text.secondary` is not a candidate under `color.*`
        assert_eq!(tokens.colors.text_secondary, DesignTokens::default().colors.text_secondary);
    }

    #[test]
    fn test_nested_hover_paths() {
        let doc = json!({
            "colors": {
                "primary": { "value": "#111111", "hover": "#222222" },
                "sidebar": { "hover": "#333333" },
                "text": { "secondary": "#444444" }
            }
        });
        let colors = resolve(&doc).colors.unwrap();
        assert_eq!(colors.primary, Some("#111111".to_string()));
        assert_eq!(colors.primary_hover, Some("#222222".to_string()));
        assert_eq!(colors.sidebar_hover, Some("#333333".to_string()));
        // `sidebar` itself is an object with no value key
        assert_eq!(colors.sidebar, None);
        assert_eq!(colors.text_secondary, Some("#444444".to_string()));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let resolved = resolve(&json!({ "shadows": { "md": "0 1px 1px #000" } }));
        assert!(resolved.colors.is_none());
        assert!(resolved.spacing.is_none());
        assert!(resolved.border_radius.is_none());
        assert!(resolved.typography.is_none());
        assert_eq!(resolved.shadows.unwrap().resolved_count(), 1);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let doc = json!({
            "theme": { "colors": { "error": "#ff0000" } },
            "radii": { "lg": 16 },
            "typography": { "h2": { "fontSize": 22 } }
        });
        let resolver = TokenResolver::new();
        assert_eq!(resolver.resolve_complete(&doc), resolver.resolve_complete(&doc));
        assert_eq!(resolve(&doc), resolve(&doc));
    }

    #[test]
    fn test_resolver_with_custom_defaults() {
        let mut defaults = DesignTokens::default();
        defaults.colors.primary = "#000000".to_string();
        let resolver = TokenResolver::with_defaults(defaults.clone());

        assert_eq!(resolver.resolve_complete(&json!({})).colors.primary, "#000000");
        assert_eq!(resolver.defaults(), &defaults);
    }
}
