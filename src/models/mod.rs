//! Data models and types for the application.
//!
//! Domain types (products, filter state) live in `crp_filter_core`; this
//! module holds the browser-side ones:
//! - [`UpdateMode`] - live re-render or URL sync + reload

mod update_mode;

pub use update_mode::UpdateMode;
