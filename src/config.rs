//! Application configuration.
//!
//! Centralizes the DOM contract with the host storefront and the UI
//! constants used throughout the application.

use crate::models::UpdateMode;

// =============================================================================
// Application Metadata
// =============================================================================

/// Prefix for every console message.
pub const LOG_PREFIX: &str = "[crp-filter]";

// =============================================================================
// Startup
// =============================================================================

/// Delay after DOM readiness before mounting, so late sibling scripts settle.
pub const INIT_DELAY_MS: u32 = 500;

/// Global holding the product array embedded by the host page.
pub const PRODUCTS_GLOBAL: &str = "wooProducts";

// =============================================================================
// DOM Contract
// =============================================================================

/// Host page selectors.
pub mod selectors {
    /// Preferred mount point (an element id).
    pub const FILTER_CONTAINER_ID: &str = "crp-filter-container";
    /// Fallback mount point.
    pub const FILTER_SIDEBAR: &str = ".crp-filter-sidebar";
    /// Theme wrapper the sidebar is moved into.
    pub const COL_FULL: &str = ".col-full";
    /// Main content area the sidebar is placed before.
    pub const PRIMARY_ID: &str = "primary";
    /// Server-rendered product grid the results replace.
    pub const HOST_GRID: &str = "ul.products";
    /// Server-rendered result count labels, removed with the grid.
    pub const HOST_RESULT_COUNT: &str = ".woocommerce-result-count";
}

/// Class of the element the results render into when a host grid exists.
pub const RESULTS_SLOT_CLASS: &str = "crp-filter-results";

/// Class marking a sidebar that was already moved.
pub const SIDEBAR_INITIALIZED_CLASS: &str = "crp-filter-sidebar-initialized";

/// Attribute on the mount point selecting the update path.
pub const UPDATE_MODE_ATTR: &str = "data-update-mode";

/// Update path used when the host page does not choose one.
pub const DEFAULT_UPDATE_MODE: UpdateMode = UpdateMode::Live;

/// Rendered element ids and classes the host theme styles against.
pub mod dom_ids {
    pub const SELECTED_FILTERS_LIST: &str = "selected-filters-list";
    pub const SELECTED_FILTERS_SECTION: &str = "selected-filters-section";
    pub const NO_PRODUCTS_MESSAGE: &str = "crp-no-products-found-message";
    pub const RESULT_COUNT: &str = "woocommerce-result-count";
}

// =============================================================================
// Product Grid
// =============================================================================

/// Shown instead of the grid when nothing matches.
pub const NO_PRODUCTS_TEXT: &str = "No products found matching your current filters.";

/// Card image when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "assets/hoddie.webp";

/// Card button label.
pub const VIEW_PRODUCT_LABEL: &str = "View product";

// =============================================================================
// Layout
// =============================================================================

/// Widths below this collapse the option groups behind a toggle.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

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
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
