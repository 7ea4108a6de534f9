//! Query-string codec for filter state.
//!
//! The storefront understands one value per dimension, so encoding keeps
//! only the first selected value of each. Parsing is lenient: a parameter
//! that does not decode leaves its dimension empty and is reported back.

use crate::error::QueryError;
use crate::filter::{Availability, FilterState, FilterValue, PriceRange};
use crate::format::{UNBOUNDED_SENTINEL, format_amount, format_max};

/// Query parameter names understood by the storefront.
pub mod params {
    pub const PRODUCT_CAT: &str = "product_cat";
    pub const MIN_PRICE: &str = "min_price";
    pub const MAX_PRICE: &str = "max_price";
    pub const STOCK_STATUS: &str = "filter_stock_status";

    pub const ALL: [&str; 4] = [PRODUCT_CAT, MIN_PRICE, MAX_PRICE, STOCK_STATUS];
}

/// Legacy spelling of an unbounded maximum.
const MAX_VALUE_SENTINEL: &str = "Number.MAX_VALUE";

/// Filter state decoded from a query string, with whatever was rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedQuery {
    pub state: FilterState,
    pub errors: Vec<QueryError>,
}

fn decode_pairs(query: &str) -> Result<Vec<(String, String)>, QueryError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    serde_urlencoded::from_str(query).map_err(|e| QueryError::Malformed(e.to_string()))
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Decode filter state from `product_cat`, `min_price`/`max_price` and
/// `filter_stock_status`. Accepts an optional leading `?`.
pub fn parse_query(query: &str) -> ParsedQuery {
    let mut parsed = ParsedQuery::default();
    let pairs = match decode_pairs(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            parsed.errors.push(e);
            return parsed;
        }
    };

    if let Some(cat) = first(&pairs, params::PRODUCT_CAT) {
        if cat.trim().is_empty() {
            parsed.errors.push(QueryError::EmptyCategory);
        } else {
            parsed.state.insert(FilterValue::category(cat));
        }
    }

    match (
        first(&pairs, params::MIN_PRICE),
        first(&pairs, params::MAX_PRICE),
    ) {
        (Some(min), Some(max)) => match parse_price_range(min, max) {
            Ok(range) => {
                parsed.state.insert(FilterValue::Price(range));
            }
            Err(e) => parsed.errors.push(e),
        },
        (Some(_), None) => parsed
            .errors
            .push(QueryError::LonePriceBound(params::MIN_PRICE)),
        (None, Some(_)) => parsed
            .errors
            .push(QueryError::LonePriceBound(params::MAX_PRICE)),
        (None, None) => {}
    }

    if let Some(status) = first(&pairs, params::STOCK_STATUS) {
        match Availability::from_slug(status) {
            Some(a) => {
                parsed.state.insert(FilterValue::Availability(a));
            }
            None => parsed
                .errors
                .push(QueryError::UnknownStockStatus(status.to_string())),
        }
    }

    parsed
}

/// Parse a `min_price`/`max_price` pair.
pub fn parse_price_range(min: &str, max: &str) -> Result<PriceRange, QueryError> {
    let min_value = min
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| QueryError::InvalidMinPrice(min.to_string()))?;

    let max = max.trim();
    if max == UNBOUNDED_SENTINEL || max == MAX_VALUE_SENTINEL {
        return Ok(PriceRange::open(min_value));
    }
    let max_value = match max.parse::<f64>() {
        Ok(v) if v == f64::INFINITY => return Ok(PriceRange::open(min_value)),
        Ok(v) if v.is_finite() => v,
        _ => return Err(QueryError::InvalidMaxPrice(max.to_string())),
    };
    if max_value < min_value {
        return Err(QueryError::EmptyPriceRange {
            min: min_value,
            max: max_value,
        });
    }
    Ok(PriceRange::bounded(min_value, max_value))
}

/// Query parameters for the first value of each non-empty dimension.
pub fn encode_state(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(cat) = state.category.first() {
        out.push((params::PRODUCT_CAT, cat.clone()));
    }
    if let Some(range) = state.price.first() {
        out.push((params::MIN_PRICE, format_amount(range.min)));
        out.push((params::MAX_PRICE, format_max(range)));
    }
    if let Some(a) = state.availability.first() {
        out.push((params::STOCK_STATUS, a.slug().to_string()));
    }
    out
}

/// Rewrite `existing` so its filter parameters reflect `state`.
///
/// Non-filter parameters keep their order; filter parameters of empty
/// dimensions are removed. Returns the query without a leading `?`.
pub fn merge_query(existing: &str, state: &FilterState) -> Result<String, QueryError> {
    // Unreadable existing queries are replaced rather than merged.
    let kept = decode_pairs(existing).unwrap_or_default();
    let mut pairs: Vec<(String, String)> = kept
        .into_iter()
        .filter(|(k, _)| !params::ALL.contains(&k.as_str()))
        .collect();
    pairs.extend(
        encode_state(state)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v)),
    );
    serde_urlencoded::to_string(&pairs).map_err(|e| QueryError::Malformed(e.to_string()))
}

/// Join path, query and hash into a relative URL.
pub fn build_url(path: &str, query: &str, hash: &str) -> String {
    if query.is_empty() {
        format!("{}{}", path, hash)
    } else {
        format!("{}?{}{}", path, query, hash)
    }
}
