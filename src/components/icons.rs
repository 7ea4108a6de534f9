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
        LuChevronDown as ChevronDown, LuChevronUp as ChevronUp, LuExternalLink as ExternalLink,
        LuSlidersHorizontal as Filters, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronDown as ChevronDown,
        BsChevronUp as ChevronUp, BsSliders as Filters, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_UP, ChevronUp);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FILTERS, Filters);
