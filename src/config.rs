//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the logo tooltip.
pub const APP_NAME: &str = "jsonscope";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key for the persisted UI configuration record.
pub const CONFIG_STORAGE_KEY: &str = "config";

/// Legacy localStorage key from the pre-config storage scheme.
/// Never written; removed on "clear" for compatibility cleanup.
pub const LEGACY_JSON_STORAGE_KEY: &str = "json";

// =============================================================================
// Document Configuration
// =============================================================================

/// The empty JSON document written on "clear".
pub const EMPTY_DOCUMENT: &str = "[]";

/// MIME filter for the import file picker.
pub const JSON_FILE_ACCEPT: &str = "application/JSON";

// =============================================================================
// External Links
// =============================================================================

/// Social profile link shown at the bottom of the sidebar.
pub const TWITTER_URL: &str = "https://twitter.com/jsonscope";

/// Source repository link shown at the bottom of the sidebar.
pub const GITHUB_URL: &str = "https://github.com/jsonscope/jsonscope";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
