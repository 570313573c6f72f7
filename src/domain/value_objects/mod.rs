//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod coercion;
pub mod css;
pub mod document;

pub use coercion::{as_css_length, as_font_weight, as_token_string};
pub use css::{Color, CssLength, CssParseError, FontWeight, LengthUnit};
pub use document::{get_by_path, unwrap_token_value, MAX_UNWRAP_DEPTH};
