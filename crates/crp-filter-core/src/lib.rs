//! Storefront product filtering: state, predicate and URL codec.
//!
//! Target-independent core of the storefront filter UI:
//! - [`Product`] - product snapshot embedded by the host page
//! - [`FilterState`] - selected prices, categories and availability
//! - [`filter_products`] - OR within a dimension, AND across dimensions
//! - [`parse_query`], [`merge_query`] - query-string encoding (first value per dimension)
//! - [`selected_tags`] - removable tag labels
//! - [`options_for`] - sidebar checkbox options

pub mod error;
pub mod filter;
pub mod format;
pub mod options;
pub mod page;
pub mod product;
pub mod query;
pub mod tags;

pub use error::{CatalogError, QueryError};
pub use filter::{
    Availability, FilterDimension, FilterState, FilterValue, PriceRange, filter_products,
};
pub use options::{FilterOption, PRICE_RANGES, options_for};
pub use product::{Catalog, Product, decode_products, parse_catalog, unique_categories};
pub use query::{ParsedQuery, merge_query, parse_query};
pub use tags::{SelectedTag, selected_tags};
