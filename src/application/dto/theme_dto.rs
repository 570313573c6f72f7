//! ThemeDto - per-category count of tokens supplied by the external document

use serde::Serialize;

use crate::domain::entities::PartialDesignTokens;

/// DTO summarising a resolution. Diagnostic only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub colors: usize,
    pub spacing: usize,
    pub border_radius: usize,
    pub typography: usize,
    pub shadows: usize,
}

impl ThemeDto {
    pub fn from_partial(partial: &PartialDesignTokens) -> Self {
        Self {
            colors: partial.colors.as_ref().map_or(0, |c| c.resolved_count()),
            spacing: partial.spacing.as_ref().map_or(0, |c| c.resolved_count()),
            border_radius: partial.border_radius.as_ref().map_or(0, |c| c.resolved_count()),
            typography: partial.typography.as_ref().map_or(0, |c| c.resolved_count()),
            shadows: partial.shadows.as_ref().map_or(0, |c| c.resolved_count()),
        }
    }

    /// Total keys overridden
    pub fn total(&self) -> usize {
        self.colors + self.spacing + self.border_radius + self.typography + self.shadows
    }
}

impl From<&PartialDesignTokens> for ThemeDto {
    fn from(partial: &PartialDesignTokens) -> Self {
        Self::from_partial(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::resolve;
    use serde_json::json;

    #[test]
    fn test_counts_per_category() {
        let partial = resolve(&json!({
            "colors": { "primary": "#000", "text": "#111" },
            "typography": { "fontFamily": "Inter" }
        }));
        let dto = ThemeDto::from(&partial);
        assert_eq!(dto.colors, 2);
        assert_eq!(dto.typography, 1);
        assert_eq!(dto.spacing, 0);
        assert_eq!(dto.total(), 3);
    }
}
