//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`LayoutDirection`] - Graph orientation with its fixed cycle order
//! - [`UiConfig`] - The persisted UI-preferences record

mod direction;
mod ui_config;

pub use direction::LayoutDirection;
pub use ui_config::UiConfig;
