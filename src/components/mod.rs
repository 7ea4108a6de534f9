//! UI components built with Leptos.
//!
//! - [`FilterSidebar`] - checkbox groups and selected-filter tags
//! - [`ProductResults`] - result count, product grid, empty message
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
mod results;
mod selected;
mod sidebar;

pub use results::ProductResults;
pub use selected::SelectedFilters;
pub use sidebar::FilterSidebar;
