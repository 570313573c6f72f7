//! ThemePresenter - Formats resolved tokens for UI consumers
//!
//! Two outputs are derived from a [`DesignTokens`] set: CSS custom
//! properties for stylesheets, and a numeric theme config for component
//! libraries that want pixels and ratios rather than CSS strings.

use serde::Serialize;

use crate::domain::entities::DesignTokens;
use crate::domain::value_objects::css::{parse_leading_float, ROOT_FONT_SIZE_PX};
use crate::domain::value_objects::{Color, CssLength};

/// Numeric theme configuration for a component library
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentThemeConfig {
    pub font_family: String,
    pub font_size: f64,
    #[serde(rename = "fontSizeSM")]
    pub font_size_sm: f64,
    #[serde(rename = "fontSizeLG")]
    pub font_size_lg: f64,
    pub line_height: f64,
    #[serde(rename = "lineHeightLG")]
    pub line_height_lg: f64,
    pub font_weight_strong: f64,
    pub color_primary: String,
    pub color_link: String,
    pub color_success: String,
    pub color_warning: String,
    pub color_error: String,
    pub color_text: String,
    pub color_text_secondary: String,
    pub color_bg_layout: String,
    pub color_bg_container: String,
    pub color_border: String,
    pub border_radius: f64,
    #[serde(rename = "borderRadiusLG")]
    pub border_radius_lg: f64,
    pub box_shadow: String,
    pub box_shadow_secondary: String,
}

/// Complete theme view model
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeViewModel {
    pub css_variables: Vec<(String, String)>,
    pub component: ComponentThemeConfig,
}

/// Presenter for resolved token sets
pub struct ThemePresenter {
    current: ThemeViewModel,
}

impl ThemePresenter {
    /// Create a presenter showing the default tokens
    pub fn new() -> Self {
        Self {
            current: Self::view_model(&DesignTokens::default()),
        }
    }

    /// Present a token set
    pub fn present(&mut self, tokens: &DesignTokens) {
        self.current = Self::view_model(tokens);
    }

    /// Get current view model
    pub fn current(&self) -> &ThemeViewModel {
        &self.current
    }

    fn view_model(tokens: &DesignTokens) -> ThemeViewModel {
        ThemeViewModel {
            css_variables: Self::css_variables(tokens),
            component: Self::component_theme(tokens),
        }
    }

    /// One `--<category>-<key>` custom property per token, in category order
    pub fn css_variables(tokens: &DesignTokens) -> Vec<(String, String)> {
        let categories = [
            ("colors", tokens.colors.entries()),
            ("spacing", tokens.spacing.entries()),
            ("border-radius", tokens.border_radius.entries()),
            ("typography", tokens.typography.entries()),
            ("shadows", tokens.shadows.entries()),
        ];

        categories
            .into_iter()
            .flat_map(|(prefix, entries)| {
                entries
                    .into_iter()
                    .map(move |(key, value)| (format!("--{}-{}", prefix, kebab_case(key)), value))
            })
            .collect()
    }

    /// Render the custom properties as a `:root` block
    pub fn render_css(tokens: &DesignTokens) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in Self::css_variables(tokens) {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }

    /// Derive the numeric component-library config
    pub fn component_theme(tokens: &DesignTokens) -> ComponentThemeConfig {
        let typography = &tokens.typography;
        let colors = &tokens.colors;

        let font_size = parse_pixel_value(&typography.font_size_base, 14.0);
        let font_size_lg = parse_pixel_value(&typography.font_size_lg, 16.0);

        ComponentThemeConfig {
            font_family: typography.font_family.clone(),
            font_size,
            font_size_sm: parse_pixel_value(&typography.font_size_sm, 12.0),
            font_size_lg,
            line_height: parse_line_height(&typography.line_height_base, font_size, 1.5),
            line_height_lg: parse_line_height(&typography.line_height_heading, font_size_lg, 1.25),
            font_weight_strong: typography.font_weight_bold.value(),
            color_primary: colors.primary.clone(),
            color_link: colors.primary.clone(),
            color_success: colors.success.clone(),
            color_warning: colors.warning.clone(),
            color_error: colors.error.clone(),
            color_text: colors.text.clone(),
            color_text_secondary: colors.text_secondary.clone(),
            color_bg_layout: colors.background.clone(),
            color_bg_container: colors.surface.clone(),
            color_border: colors.border.clone(),
            border_radius: parse_pixel_value(&tokens.border_radius.md, 8.0),
            border_radius_lg: parse_pixel_value(&tokens.border_radius.lg, 12.0),
            box_shadow: tokens.shadows.md.clone(),
            box_shadow_secondary: tokens.shadows.sm.clone(),
        }
    }

    /// Color tokens parsed to RGBA; `None` for values that are not hex
    /// (`rgb(..)`, named colors, CSS variables)
    pub fn palette(tokens: &DesignTokens) -> Vec<(&'static str, Option<Color>)> {
        tokens
            .colors
            .entries()
            .into_iter()
            .map(|(key, value)| (key, Color::from_hex(&value).ok()))
            .collect()
    }
}

impl Default for ThemePresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// `primaryHover` -> `primary-hover`
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Pixels from a CSS length; rem/em scale by the root font size
pub fn parse_pixel_value(value: &str, fallback: f64) -> f64 {
    CssLength::parse(value).map_or(fallback, |length| length.to_pixels())
}

/// Unitless line-height ratio relative to `font_size` pixels
pub fn parse_line_height(value: &str, font_size: f64, fallback: f64) -> f64 {
    let normalized = value.trim().to_lowercase();

    if let Some(px) = normalized.strip_suffix("px") {
        return match parse_leading_float(px) {
            Some(px) if font_size > 0.0 => px / font_size,
            _ => fallback,
        };
    }
    if let Some(percent) = normalized.strip_suffix('%') {
        return parse_leading_float(percent).map_or(fallback, |p| p / 100.0);
    }
    if normalized.ends_with("em") {
        let number = normalized.trim_end_matches("em").trim_end_matches('r');
        return match parse_leading_float(number) {
            Some(em) if font_size > 0.0 => em * ROOT_FONT_SIZE_PX / font_size,
            _ => fallback,
        };
    }

    parse_leading_float(&normalized).unwrap_or(fallback)
}
