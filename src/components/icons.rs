//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as ArrowDown, LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight,
        LuArrowUp as ArrowUp, LuChevronsDownUp as Collapse, LuChevronsUpDown as Expand,
        LuEraser as Clear, LuExternalLink as Github, LuExternalLink as Twitter, LuHouse as Home,
        LuToggleLeft as ControlsOff, LuToggleRight as ControlsOn, LuUpload as Import,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as ArrowDown, BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight,
        BsArrowUp as ArrowUp, BsArrowsCollapse as Collapse, BsArrowsExpand as Expand,
        BsEraser as Clear, BsFileEarmarkArrowUp as Import, BsGithub as Github,
        BsHouseFill as Home, BsToggleOff as ControlsOff, BsToggleOn as ControlsOn,
        BsTwitter as Twitter,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub static $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(CLEAR, Clear);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(ARROW_DOWN, ArrowDown);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CONTROLS_ON, ControlsOn);
themed_icon!(CONTROLS_OFF, ControlsOff);
themed_icon!(EXPAND, Expand);
themed_icon!(COLLAPSE, Collapse);
themed_icon!(IMPORT, Import);
themed_icon!(TWITTER, Twitter);
themed_icon!(GITHUB, Github);
