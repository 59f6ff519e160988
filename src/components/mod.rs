//! UI components built with Leptos.
//!
//! - [`hooks`] - Reusable stateful logic (page-loaded gate)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sidebar`] - The vertical icon bar

pub mod hooks;
pub mod icons;
pub mod sidebar;

pub use sidebar::Sidebar;
