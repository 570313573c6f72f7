//! Application Services

pub mod theme_manager;

pub use theme_manager::ThemeContext;
