//! CSS-facing value objects: Color, CssLength, FontWeight
//!
//! Token values are stored as CSS-ready strings. These types parse them
//! back into numbers for consumers that need channels or pixel values.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CssParseError {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Root font size used to convert rem/em lengths to pixels
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// RGBA color (0.0-1.0 range)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create color from RGBA values (0-255)
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse hex color string (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Result<Self, CssParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CssParseError::InvalidHexColor(hex.to_string()));
        }

        match digits.len() {
            3 | 4 => {
                // Short form: each digit is doubled (#abc -> #aabbcc)
                let mut channels = [255u8; 4];
                for (i, c) in digits.chars().enumerate() {
                    channels[i] = parse_hex_digit(c)? * 17;
                }
                Ok(Self::rgba(channels[0], channels[1], channels[2], channels[3]))
            }
            6 | 8 => {
                let mut channels = [255u8; 4];
                for i in 0..digits.len() / 2 {
                    channels[i] = parse_hex_byte(&digits[i * 2..i * 2 + 2])?;
                }
                Ok(Self::rgba(channels[0], channels[1], channels[2], channels[3]))
            }
            _ => Err(CssParseError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Channels as 0-255 bytes
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

fn parse_hex_digit(c: char) -> Result<u8, CssParseError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| CssParseError::InvalidHexColor(c.to_string()))
}

fn parse_hex_byte(s: &str) -> Result<u8, CssParseError> {
    u8::from_str_radix(s, 16).map_err(|_| CssParseError::InvalidHexColor(s.to_string()))
}

/// Length unit types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Px,
    Rem,
    Em,
    Percent,
    /// No unit suffix (line-height ratios)
    None,
}

/// A parsed CSS length: leading number plus unit
#[derive(Clone, Debug, PartialEq)]
pub struct CssLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl CssLength {
    /// Parse a length token such as `16px`, `1.5rem`, `120%` or `1.5`.
    ///
    /// Unknown suffixes are treated as pixels, matching how a browser-side
    /// theme would read `parseFloat` on the value.
    pub fn parse(input: &str) -> Result<Self, CssParseError> {
        let normalized = input.trim().to_lowercase();
        let value = parse_leading_float(&normalized)
            .ok_or_else(|| CssParseError::InvalidNumber(input.to_string()))?;

        let unit = if normalized.ends_with("rem") {
            LengthUnit::Rem
        } else if normalized.ends_with("em") {
            LengthUnit::Em
        } else if normalized.ends_with('%') {
            LengthUnit::Percent
        } else if normalized.ends_with("px") {
            LengthUnit::Px
        } else if is_bare_number(&normalized) {
            LengthUnit::None
        } else {
            LengthUnit::Px
        };

        Ok(Self { value, unit })
    }

    /// Resolve to pixels; rem and em are relative to the root font size.
    /// Percent and unitless values return the bare number.
    pub fn to_pixels(&self) -> f64 {
        match self.unit {
            LengthUnit::Rem | LengthUnit::Em => self.value * ROOT_FONT_SIZE_PX,
            LengthUnit::Px | LengthUnit::Percent | LengthUnit::None => self.value,
        }
    }
}

/// Numeric font weight. Serializes as an integer when it has no fraction.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(pub f64);

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight(400.0);
    pub const MEDIUM: FontWeight = FontWeight(500.0);
    pub const BOLD: FontWeight = FontWeight(700.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    fn is_integral(&self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(FontWeight)
    }
}

/// `^-?\d+(\.\d+)?$` - a plain number with no unit suffix
pub fn is_bare_number(s: &str) -> bool {
    static BARE: OnceLock<Regex> = OnceLock::new();
    BARE.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid regex"))
        .is_match(s)
}

/// Parse the longest numeric prefix of a string, the way `parseFloat` does.
///
/// `"600px"` yields 600, `".5rem"` yields 0.5, `"bold"` yields None.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let re = LEADING.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("valid regex")
    });
    let m = re.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}
