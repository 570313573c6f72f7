//! Domain Entities - Core business objects
//!
//! The token categories and the aggregate design token set, in both their
//! complete and partially resolved forms.

pub mod tokens;

pub use tokens::{
    BorderRadiusTokens, ColorTokens, DesignTokens, PartialBorderRadiusTokens, PartialColorTokens,
    PartialDesignTokens, PartialShadowTokens, PartialSpacingTokens, PartialTypographyTokens,
    ShadowTokens, SpacingTokens, TypographyTokens,
};
