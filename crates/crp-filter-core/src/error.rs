//! Error types for catalog decoding and query parsing.

use thiserror::Error;

/// Errors raised while decoding the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload is not a JSON array.
    #[error("invalid product catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// One array entry is not a usable product.
    #[error("product #{index} skipped: {source}")]
    Record {
        index: usize,
        source: serde_json::Error,
    },
}

/// Errors raised while reading filter state from a query string.
///
/// These never abort parsing; the affected dimension is left empty and the
/// error is handed back to the caller for logging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The query string itself is not `application/x-www-form-urlencoded`.
    #[error("malformed query string: {0}")]
    Malformed(String),
    /// `min_price` is not a finite number.
    #[error("invalid min_price '{0}'")]
    InvalidMinPrice(String),
    /// `max_price` is neither a number nor an unbounded sentinel.
    #[error("invalid max_price '{0}'")]
    InvalidMaxPrice(String),
    /// `max_price` is below `min_price`.
    #[error("price range {min}..{max} is empty")]
    EmptyPriceRange { min: f64, max: f64 },
    /// Only one of `min_price` / `max_price` was given.
    #[error("'{0}' needs both min_price and max_price")]
    LonePriceBound(&'static str),
    /// `filter_stock_status` is not a known availability slug.
    #[error("unknown stock status '{0}'")]
    UnknownStockStatus(String),
    /// `product_cat` is present but blank.
    #[error("empty product_cat")]
    EmptyCategory,
}
