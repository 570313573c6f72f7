//! Candidate path lists for every semantic token key
//!
//! Token documents in the wild nest the same value under different names
//! (`colors.primary`, `semantic.color.primary`, `tokens.colors.primary`...).
//! Each list is ordered by preference; the first path that yields a valid
//! value wins.

/// Dotted lookup paths for one semantic key
pub type CandidatePaths = &'static [&'static str];

pub mod colors {
    use super::CandidatePaths;

    pub const PRIMARY: CandidatePaths = &[
        "colors.primary",
        "color.primary",
        "semantic.color.primary",
        "theme.colors.primary",
        "tokens.colors.primary",
        "tokens.color.primary",
    ];
    pub const PRIMARY_HOVER: CandidatePaths = &[
        "colors.primaryHover",
        "colors.primary.hover",
        "color.primaryHover",
        "semantic.color.primaryHover",
        "theme.colors.primaryHover",
        "tokens.colors.primaryHover",
    ];
    pub const SECONDARY: CandidatePaths = &[
        "colors.secondary",
        "color.secondary",
        "semantic.color.secondary",
        "theme.colors.secondary",
        "tokens.colors.secondary",
    ];
    pub const BACKGROUND: CandidatePaths = &[
        "colors.background",
        "color.background",
        "semantic.color.background",
        "theme.colors.background",
        "tokens.colors.background",
    ];
    pub const SURFACE: CandidatePaths = &[
        "colors.surface",
        "color.surface",
        "semantic.color.surface",
        "theme.colors.surface",
        "tokens.colors.surface",
    ];
    pub const SIDEBAR: CandidatePaths = &[
        "colors.sidebar",
        "color.sidebar",
        "theme.colors.sidebar",
        "tokens.colors.sidebar",
    ];
    pub const SIDEBAR_HOVER: CandidatePaths = &[
        "colors.sidebarHover",
        "colors.sidebar.hover",
        "color.sidebarHover",
        "theme.colors.sidebarHover",
        "tokens.colors.sidebarHover",
    ];
    pub const TEXT: CandidatePaths = &[
        "colors.text",
        "color.text",
        "semantic.color.text",
        "theme.colors.text",
        "tokens.colors.text",
    ];
    pub const TEXT_SECONDARY: CandidatePaths = &[
        "colors.textSecondary",
        "colors.text.secondary",
        "color.textSecondary",
        "semantic.color.textSecondary",
        "theme.colors.textSecondary",
        "tokens.colors.textSecondary",
    ];
    pub const BORDER: CandidatePaths = &[
        "colors.border",
        "color.border",
        "semantic.color.border",
        "theme.colors.border",
        "tokens.colors.border",
    ];
    pub const SUCCESS: CandidatePaths = &[
        "colors.success",
        "color.success",
        "semantic.color.success",
        "theme.colors.success",
        "tokens.colors.success",
    ];
    pub const WARNING: CandidatePaths = &[
        "colors.warning",
        "color.warning",
        "semantic.color.warning",
        "theme.colors.warning",
        "tokens.colors.warning",
    ];
    pub const ERROR: CandidatePaths = &[
        "colors.error",
        "color.error",
        "semantic.color.error",
        "theme.colors.error",
        "tokens.colors.error",
    ];
}

/// Numeric aliases (`spacing.4`) follow a 4px-grid naming scheme
pub mod spacing {
    use super::CandidatePaths;

    pub const XS: CandidatePaths = &[
        "spacing.xs",
        "space.xs",
        "tokens.spacing.xs",
        "size.spacing.xs",
        "spacing.2",
        "space.2",
    ];
    pub const SM: CandidatePaths = &[
        "spacing.sm",
        "space.sm",
        "tokens.spacing.sm",
        "size.spacing.sm",
        "spacing.4",
        "space.4",
    ];
    pub const MD: CandidatePaths = &[
        "spacing.md",
        "space.md",
        "tokens.spacing.md",
        "size.spacing.md",
        "spacing.6",
        "space.6",
    ];
    pub const LG: CandidatePaths = &[
        "spacing.lg",
        "space.lg",
        "tokens.spacing.lg",
        "size.spacing.lg",
        "spacing.8",
        "space.8",
    ];
    pub const XL: CandidatePaths = &[
        "spacing.xl",
        "space.xl",
        "tokens.spacing.xl",
        "size.spacing.xl",
        "spacing.10",
        "space.10",
    ];
    pub const XXL: CandidatePaths = &[
        "spacing.xxl",
        "space.xxl",
        "tokens.spacing.xxl",
        "size.spacing.xxl",
        "spacing.12",
        "space.12",
    ];
}

pub mod border_radius {
    use super::CandidatePaths;

    pub const SM: CandidatePaths = &[
        "borderRadius.sm",
        "radius.sm",
        "radii.sm",
        "tokens.borderRadius.sm",
        "size.radius.sm",
    ];
    pub const MD: CandidatePaths = &[
        "borderRadius.md",
        "radius.md",
        "radii.md",
        "tokens.borderRadius.md",
        "size.radius.md",
    ];
    pub const LG: CandidatePaths = &[
        "borderRadius.lg",
        "radius.lg",
        "radii.lg",
        "tokens.borderRadius.lg",
        "size.radius.lg",
    ];
}

/// Composite text styles (`typography.body`, `typography.h1`...) are
/// searched both bare and through an explicit `value` key.
pub mod typography {
    use super::CandidatePaths;

    pub const FONT_FAMILY: CandidatePaths = &[
        "typography.fontFamily",
        "typography.body.fontFamily",
        "typography.body.value.fontFamily",
        "tokens.typography.fontFamily",
        "font.family.base",
        "fontFamily",
    ];
    pub const FONT_SIZE_SM: CandidatePaths = &[
        "typography.fontSizeSm",
        "typography.fontSize.sm",
        "typography.caption.fontSize",
        "typography.caption.value.fontSize",
        "font.size.sm",
        "font.size.12",
    ];
    pub const FONT_SIZE_BASE: CandidatePaths = &[
        "typography.fontSizeBase",
        "typography.fontSize.base",
        "typography.body.fontSize",
        "typography.body.value.fontSize",
        "font.size.base",
        "font.size.14",
    ];
    pub const FONT_SIZE_LG: CandidatePaths = &[
        "typography.fontSizeLg",
        "typography.fontSize.lg",
        "typography.subtitle.fontSize",
        "typography.subtitle.value.fontSize",
        "font.size.lg",
        "font.size.16",
    ];
    pub const LINE_HEIGHT_BASE: CandidatePaths = &[
        "typography.lineHeightBase",
        "typography.lineHeight.base",
        "typography.body.lineHeight",
        "typography.body.value.lineHeight",
        "font.lineHeight.base",
    ];
    pub const LINE_HEIGHT_HEADING: CandidatePaths = &[
        "typography.lineHeightHeading",
        "typography.lineHeight.heading",
        "typography.heading.lineHeight",
        "typography.heading.value.lineHeight",
        "font.lineHeight.heading",
    ];
    pub const FONT_WEIGHT_REGULAR: CandidatePaths = &[
        "typography.fontWeightRegular",
        "typography.body.fontWeight",
        "typography.body.value.fontWeight",
        "font.weight.regular",
        "font.weight.400",
    ];
    pub const FONT_WEIGHT_MEDIUM: CandidatePaths = &[
        "typography.fontWeightMedium",
        "typography.subtitle.fontWeight",
        "typography.subtitle.value.fontWeight",
        "font.weight.medium",
        "font.weight.500",
    ];
    pub const FONT_WEIGHT_BOLD: CandidatePaths = &[
        "typography.fontWeightBold",
        "typography.heading.fontWeight",
        "typography.heading.value.fontWeight",
        "font.weight.bold",
        "font.weight.700",
    ];
    pub const HEADING1_SIZE: CandidatePaths = &[
        "typography.heading1Size",
        "typography.h1.fontSize",
        "typography.h1.value.fontSize",
        "typography.heading.h1.fontSize",
        "font.size.h1",
    ];
    pub const HEADING2_SIZE: CandidatePaths = &[
        "typography.heading2Size",
        "typography.h2.fontSize",
        "typography.h2.value.fontSize",
        "typography.heading.h2.fontSize",
        "font.size.h2",
    ];
}

pub mod shadows {
    use super::CandidatePaths;

    pub const SM: CandidatePaths = &["shadows.sm", "shadow.sm", "effects.shadow.sm", "tokens.shadows.sm"];
    pub const MD: CandidatePaths = &["shadows.md", "shadow.md", "effects.shadow.md", "tokens.shadows.md"];
    pub const LG: CandidatePaths = &["shadows.lg", "shadow.lg", "effects.shadow.lg", "tokens.shadows.lg"];
}
