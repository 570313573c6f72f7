//! Data Transfer Objects

pub mod theme_dto;

pub use theme_dto::ThemeDto;
