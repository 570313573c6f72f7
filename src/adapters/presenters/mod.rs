//! Presenters - derive consumer-facing values from resolved tokens

pub mod theme_presenter;

pub use theme_presenter::{ComponentThemeConfig, ThemePresenter};
