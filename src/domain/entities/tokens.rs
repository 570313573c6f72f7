//! Design token categories and the aggregate token set
//!
//! Every category comes in two shapes: the complete struct consumed by
//! rendering code, and a `Partial*` struct where each key is optional.
//! The resolver produces partials; merging a partial over a complete
//! struct overrides exactly the keys that were resolved.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FontWeight;

/// Declares a category struct, its partial counterpart, and the per-key
/// merge/enumeration helpers. `$key` is the document-facing (camelCase) name.
macro_rules! token_category {
    (
        $(#[$meta:meta])*
        $name:ident, $partial:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        #[doc = concat!("[`", stringify!($name), "`] with every key optional")]
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $partial {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Semantic keys in declaration order
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Overlay resolved keys onto `self`; unresolved keys keep their value
            pub fn merged(&self, incoming: &$partial) -> Self {
                Self {
                    $( $field: incoming.$field.clone().unwrap_or_else(|| self.$field.clone()), )+
                }
            }

            /// `(key, css value)` pairs in declaration order
            pub fn entries(&self) -> Vec<(&'static str, String)> {
                vec![$( ($key, self.$field.to_string()) ),+]
            }
        }

        impl $partial {
            /// Number of keys that carry a value
            pub fn resolved_count(&self) -> usize {
                [$( self.$field.is_some() ),+].iter().filter(|set| **set).count()
            }

            pub fn is_empty(&self) -> bool {
                self.resolved_count() == 0
            }
        }
    };
}

token_category! {
    /// Semantic color palette
    ColorTokens, PartialColorTokens {
        primary: String => "primary",
        primary_hover: String => "primaryHover",
        secondary: String => "secondary",
        background: String => "background",
        surface: String => "surface",
        sidebar: String => "sidebar",
        sidebar_hover: String => "sidebarHover",
        text: String => "text",
        text_secondary: String => "textSecondary",
        border: String => "border",
        success: String => "success",
        warning: String => "warning",
        error: String => "error",
    }
}

token_category! {
    /// Spacing scale (CSS lengths)
    SpacingTokens, PartialSpacingTokens {
        xs: String => "xs",
        sm: String => "sm",
        md: String => "md",
        lg: String => "lg",
        xl: String => "xl",
        xxl: String => "xxl",
    }
}

token_category! {
    /// Corner radii (CSS lengths)
    BorderRadiusTokens, PartialBorderRadiusTokens {
        sm: String => "sm",
        md: String => "md",
        lg: String => "lg",
    }
}

token_category! {
    /// Font family, sizes, line heights and weights
    TypographyTokens, PartialTypographyTokens {
        font_family: String => "fontFamily",
        font_size_sm: String => "fontSizeSm",
        font_size_base: String => "fontSizeBase",
        font_size_lg: String => "fontSizeLg",
        /// Unitless ratio or CSS length
        line_height_base: String => "lineHeightBase",
        line_height_heading: String => "lineHeightHeading",
        font_weight_regular: FontWeight => "fontWeightRegular",
        font_weight_medium: FontWeight => "fontWeightMedium",
        font_weight_bold: FontWeight => "fontWeightBold",
        heading1_size: String => "heading1Size",
        heading2_size: String => "heading2Size",
    }
}

token_category! {
    /// Box shadows as CSS strings
    ShadowTokens, PartialShadowTokens {
        sm: String => "sm",
        md: String => "md",
        lg: String => "lg",
    }
}

/// The complete token set. Every key in every category is always defined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub border_radius: BorderRadiusTokens,
    pub typography: TypographyTokens,
    pub shadows: ShadowTokens,
}

/// Resolver output: a category is `None` when none of its keys resolved
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialDesignTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialColorTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacingTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<PartialBorderRadiusTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypographyTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<PartialShadowTokens>,
}

impl PartialDesignTokens {
    /// True when the resolver found nothing at all
    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.spacing.is_none()
            && self.border_radius.is_none()
            && self.typography.is_none()
            && self.shadows.is_none()
    }
}

impl DesignTokens {
    /// Shallow per-key override: each category keeps its own values for keys
    /// the partial leaves unset, and absent categories stay untouched.
    pub fn merged(&self, partial: &PartialDesignTokens) -> Self {
        Self {
            colors: merge_category(&self.colors, partial.colors.as_ref(), ColorTokens::merged),
            spacing: merge_category(&self.spacing, partial.spacing.as_ref(), SpacingTokens::merged),
            border_radius: merge_category(
                &self.border_radius,
                partial.border_radius.as_ref(),
                BorderRadiusTokens::merged,
            ),
            typography: merge_category(
                &self.typography,
                partial.typography.as_ref(),
                TypographyTokens::merged,
            ),
            shadows: merge_category(&self.shadows, partial.shadows.as_ref(), ShadowTokens::merged),
        }
    }
}

fn merge_category<T: Clone, P>(base: &T, incoming: Option<&P>, merge: fn(&T, &P) -> T) -> T {
    match incoming {
        Some(partial) => merge(base, partial),
        None => base.clone(),
    }
}

/// The compiled-in default token table
impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            colors: ColorTokens {
                primary: "#6E3FF3".to_string(),
                primary_hover: "#5B2ED9".to_string(),
                secondary: "#00B4D8".to_string(),
                background: "#F5F5F5".to_string(),
                surface: "#FFFFFF".to_string(),
                sidebar: "#1A1A2E".to_string(),
                sidebar_hover: "#2A2A4A".to_string(),
                text: "#1A1A2E".to_string(),
                text_secondary: "#6B7280".to_string(),
                border: "#E5E7EB".to_string(),
                success: "#10B981".to_string(),
                warning: "#F59E0B".to_string(),
                error: "#EF4444".to_string(),
            },
            spacing: SpacingTokens {
                xs: "4px".to_string(),
                sm: "8px".to_string(),
                md: "16px".to_string(),
                lg: "24px".to_string(),
                xl: "32px".to_string(),
                xxl: "48px".to_string(),
            },
            border_radius: BorderRadiusTokens {
                sm: "6px".to_string(),
                md: "8px".to_string(),
                lg: "12px".to_string(),
            },
            typography: TypographyTokens {
                font_family: "'Inter', 'Segoe UI', Roboto, Helvetica, Arial, sans-serif".to_string(),
                font_size_sm: "12px".to_string(),
                font_size_base: "14px".to_string(),
                font_size_lg: "16px".to_string(),
                line_height_base: "1.5".to_string(),
                line_height_heading: "1.25".to_string(),
                font_weight_regular: FontWeight::REGULAR,
                font_weight_medium: FontWeight::MEDIUM,
                font_weight_bold: FontWeight::BOLD,
                heading1_size: "32px".to_string(),
                heading2_size: "24px".to_string(),
            },
            shadows: ShadowTokens {
                sm: "0 1px 2px rgba(0, 0, 0, 0.05)".to_string(),
                md: "0 4px 12px rgba(0, 0, 0, 0.08)".to_string(),
                lg: "0 12px 32px rgba(0, 0, 0, 0.12)".to_string(),
            },
        }
    }
}
