//! Raw document values -> typed token values
//!
//! Each coercion owns validity for its token kind. `None` means "no value";
//! the caller moves on to the next candidate path.

use serde_json::{Number, Value};

use super::css::{is_bare_number, parse_leading_float, FontWeight};
use super::document::unwrap_token_value;

/// Stringify a JSON number the way a browser would print it.
///
/// Magnitudes below 1e-6 or from 1e21 up switch to exponent form
/// (`1e-7`, `1e+21`), which is not a bare number and so gains no unit.
fn number_to_string(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64().filter(|f| f.is_finite())?;
    // -0 prints as 0
    if f == 0.0 {
        return Some("0".to_string());
    }
    if f.abs() < 1e-6 || f.abs() >= 1e21 {
        return Some(exponent_form(f));
    }
    Some(f.to_string())
}

/// `1.5e21` -> `1.5e+21`, `1e-7` -> `1e-7`
fn exponent_form(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

/// Plain string token: colors, font family, line heights, shadows.
///
/// Strings are trimmed and must be non-empty; numbers are stringified.
pub fn as_token_string(value: &Value) -> Option<String> {
    match unwrap_token_value(value) {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => number_to_string(n),
        _ => None,
    }
}

/// CSS length token: spacing, radii, font sizes.
///
/// A bare number gains a `px` suffix; anything with a unit or a keyword
/// passes through untouched.
pub fn as_css_length(value: &Value) -> Option<String> {
    let parsed = as_token_string(value)?;
    if is_bare_number(&parsed) {
        Some(format!("{}px", parsed))
    } else {
        Some(parsed)
    }
}

/// Font weight token: numbers, `regular`/`medium`/`bold`, or numeric strings
pub fn as_font_weight(value: &Value) -> Option<FontWeight> {
    match unwrap_token_value(value) {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(FontWeight),
        Value::String(s) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "regular" => Some(FontWeight::REGULAR),
                "medium" => Some(FontWeight::MEDIUM),
                "bold" => Some(FontWeight::BOLD),
                other => parse_leading_float(other).map(FontWeight),
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_trims_and_rejects_empty() {
        assert_eq!(as_token_string(&json!("  #fff ")), Some("#fff".to_string()));
        assert_eq!(as_token_string(&json!("   ")), None);
        assert_eq!(as_token_string(&json!("")), None);
    }

    #[test]
    fn test_string_accepts_numbers() {
        assert_eq!(as_token_string(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(as_token_string(&json!(20)), Some("20".to_string()));
        assert_eq!(as_token_string(&json!(8.0)), Some("8".to_string()));
        assert_eq!(as_token_string(&json!(-0.0)), Some("0".to_string()));
    }

    #[test]
    fn test_string_rejects_other_kinds() {
        assert_eq!(as_token_string(&json!(true)), None);
        assert_eq!(as_token_string(&Value::Null), None);
        assert_eq!(as_token_string(&json!(["#fff"])), None);
        assert_eq!(as_token_string(&json!({ "foo": 1 })), None);
    }

    #[test]
    fn test_string_unwraps() {
        assert_eq!(
            as_token_string(&json!({ "$value": { "value": "#abc" } })),
            Some("#abc".to_string())
        );
    }

    #[test]
    fn test_css_length() {
        assert_eq!(as_css_length(&json!(8)), Some("8px".to_string()));
        assert_eq!(as_css_length(&json!("12")), Some("12px".to_string()));
        assert_eq!(as_css_length(&json!("-1.5")), Some("-1.5px".to_string()));
        assert_eq!(as_css_length(&json!("0.5rem")), Some("0.5rem".to_string()));
        assert_eq!(as_css_length(&json!("auto")), Some("auto".to_string()));
        assert_eq!(as_css_length(&json!(null)), None);
    }

    #[test]
    fn test_extreme_numbers_use_exponent_form() {
        assert_eq!(as_token_string(&json!(1e-7)), Some("1e-7".to_string()));
        assert_eq!(as_token_string(&json!(1.5e21)), Some("1.5e+21".to_string()));
        assert_eq!(as_token_string(&json!(-2.5e-8)), Some("-2.5e-8".to_string()));
        assert_eq!(as_token_string(&json!(0.000001)), Some("0.000001".to_string()));
        assert_eq!(as_css_length(&json!(1e-7)), Some("1e-7".to_string()));
        assert_eq!(as_css_length(&json!(1e21)), Some("1e+21".to_string()));
    }

    #[test]
    fn test_font_weight_keywords() {
        assert_eq!(as_font_weight(&json!("Bold")), Some(FontWeight(700.0)));
        assert_eq!(as_font_weight(&json!("BOLD")), Some(FontWeight(700.0)));
        assert_eq!(as_font_weight(&json!("medium")), Some(FontWeight(500.0)));
        assert_eq!(as_font_weight(&json!(" Regular ")), Some(FontWeight(400.0)));
    }

    #[test]
    fn test_font_weight_numbers() {
        assert_eq!(as_font_weight(&json!(650)), Some(FontWeight(650.0)));
        assert_eq!(as_font_weight(&json!("600")), Some(FontWeight(600.0)));
        assert_eq!(as_font_weight(&json!("600 semibold")), Some(FontWeight(600.0)));
        assert_eq!(as_font_weight(&json!("semibold")), None);
        assert_eq!(as_font_weight(&json!(false)), None);
    }
}
