//! Filter state and the product predicate.
//!
//! A [`FilterState`] holds the selected values of three dimensions. A product
//! matches when every non-empty dimension has at least one selected value
//! that accepts it: OR within a dimension, AND across dimensions.

use crate::product::Product;

/// One of the three filterable dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Price,
    Category,
    Availability,
}

impl FilterDimension {
    /// Key used in DOM ids and `data-filter-type` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Category => "category",
            Self::Availability => "availability",
        }
    }

    /// Section heading in the sidebar.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Category => "Categories",
            Self::Availability => "Availability",
        }
    }

    /// `data-filter-type` of the sidebar group container.
    pub fn group_key(self) -> &'static str {
        match self {
            Self::Price => "price-filter",
            Self::Category => "category-filter",
            Self::Availability => "stock-filter",
        }
    }
}

/// Inclusive price band. `max == None` means no upper bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn open(min: f64) -> Self {
        Self { min, max: None }
    }

    /// `min <= price <= max`.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Stock status a shopper can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn slug(self) -> &'static str {
        match self {
            Self::InStock => "instock",
            Self::OutOfStock => "outofstock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::OutOfStock => "Out of stock",
        }
    }

    /// Parse a slug, ignoring case and surrounding whitespace.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "instock" => Some(Self::InStock),
            "outofstock" => Some(Self::OutOfStock),
            _ => None,
        }
    }

    pub fn accepts(self, in_stock: bool) -> bool {
        match self {
            Self::InStock => in_stock,
            Self::OutOfStock => !in_stock,
        }
    }
}

/// A single selectable filter value.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Price(PriceRange),
    /// Lowercase category slug.
    Category(String),
    Availability(Availability),
}

impl FilterValue {
    /// Category value from a display name or slug; the slug is lowercased.
    pub fn category(name: &str) -> Self {
        Self::Category(name.trim().to_lowercase())
    }

    pub fn dimension(&self) -> FilterDimension {
        match self {
            Self::Price(_) => FilterDimension::Price,
            Self::Category(_) => FilterDimension::Category,
            Self::Availability(_) => FilterDimension::Availability,
        }
    }
}

/// Active filter selections.
///
/// Each list behaves as an insertion-ordered set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub price: Vec<PriceRange>,
    pub category: Vec<String>,
    pub availability: Vec<Availability>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.price.is_empty() && self.category.is_empty() && self.availability.is_empty()
    }

    /// Number of active values across all dimensions.
    pub fn len(&self) -> usize {
        self.price.len() + self.category.len() + self.availability.len()
    }

    pub fn contains(&self, value: &FilterValue) -> bool {
        match value {
            FilterValue::Price(range) => self.price.contains(range),
            FilterValue::Category(slug) => self.category.iter().any(|c| *c == slug.to_lowercase()),
            FilterValue::Availability(a) => self.availability.contains(a),
        }
    }

    /// Add a value. Returns `false` if it was already selected.
    pub fn insert(&mut self, value: FilterValue) -> bool {
        if self.contains(&value) {
            return false;
        }
        match value {
            FilterValue::Price(range) => self.price.push(range),
            FilterValue::Category(slug) => self.category.push(slug.to_lowercase()),
            FilterValue::Availability(a) => self.availability.push(a),
        }
        true
    }

    /// Remove a value. Returns `false` if it was not selected.
    pub fn remove(&mut self, value: &FilterValue) -> bool {
        let before = self.len();
        match value {
            FilterValue::Price(range) => self.price.retain(|r| r != range),
            FilterValue::Category(slug) => {
                let slug = slug.to_lowercase();
                self.category.retain(|c| *c != slug);
            }
            FilterValue::Availability(a) => self.availability.retain(|x| x != a),
        }
        self.len() != before
    }

    /// Apply a checkbox toggle.
    pub fn set(&mut self, value: FilterValue, checked: bool) -> bool {
        if checked {
            self.insert(value)
        } else {
            self.remove(&value)
        }
    }

    pub fn clear(&mut self) {
        self.price.clear();
        self.category.clear();
        self.availability.clear();
    }

    /// Active values in display order: price, category, availability.
    pub fn values(&self) -> Vec<FilterValue> {
        self.price
            .iter()
            .copied()
            .map(FilterValue::Price)
            .chain(self.category.iter().cloned().map(FilterValue::Category))
            .chain(
                self.availability
                    .iter()
                    .copied()
                    .map(FilterValue::Availability),
            )
            .collect()
    }

    /// Evaluate the predicate for one product.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_availability(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || self.category.iter().any(|slug| product.has_category(slug))
    }

    fn matches_price(&self, product: &Product) -> bool {
        if self.price.is_empty() {
            return true;
        }
        let Some(price) = product.price_value() else {
            return false;
        };
        self.price.iter().any(|range| range.contains(price))
    }

    // Both statuses selected means no constraint.
    fn matches_availability(&self, product: &Product) -> bool {
        self.availability.is_empty()
            || self
                .availability
                .iter()
                .any(|a| a.accepts(product.in_stock))
    }
}

/// Products accepted by `state`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    products.iter().filter(|p| state.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: &str, in_stock: bool, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: price.to_string(),
            in_stock,
            categories: vec![category.to_string()],
            ..Default::default()
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "50", true, "Benie"),
            product(2, "150", false, "Benie"),
            product(3, "250", true, "Jacket"),
            product(4, "900", true, "Pants"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let products = sample();
        let state = FilterState::new();
        assert!(state.is_empty());
        assert_eq!(filter_products(&products, &state).len(), products.len());
    }

    #[test]
    fn test_or_within_dimension() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::category("Benie"));
        state.insert(FilterValue::category("Pants"));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 2, 4]);
    }

    #[test]
    fn test_and_across_dimensions() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::category("benie"));
        state.insert(FilterValue::Availability(Availability::InStock));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1]);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let range = PriceRange::bounded(101.0, 200.0);
        assert!(range.contains(101.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(100.5));
        assert!(!range.contains(200.01));
    }

    #[test]
    fn test_open_price_band() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::Price(PriceRange::open(501.0)));
        assert_eq!(ids(&filter_products(&products, &state)), vec![4]);
    }

    #[test]
    fn test_multiple_price_ranges() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::Price(PriceRange::bounded(0.0, 100.0)));
        state.insert(FilterValue::Price(PriceRange::bounded(201.0, 300.0)));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 3]);
    }

    #[test]
    fn test_unparsable_price_fails_price_filter_only() {
        let products = vec![product(9, "n/a", true, "Benie")];
        let mut state = FilterState::new();
        assert_eq!(filter_products(&products, &state).len(), 1);
        state.insert(FilterValue::Price(PriceRange::open(0.0)));
        assert!(filter_products(&products, &state).is_empty());
    }

    #[test]
    fn test_both_availability_values_not_restrictive() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::Availability(Availability::InStock));
        state.insert(FilterValue::Availability(Availability::OutOfStock));
        assert_eq!(filter_products(&products, &state).len(), products.len());
    }

    #[test]
    fn test_out_of_stock_only() {
        let products = sample();
        let mut state = FilterState::new();
        state.insert(FilterValue::Availability(Availability::OutOfStock));
        assert_eq!(ids(&filter_products(&products, &state)), vec![2]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut state = FilterState::new();
        assert!(state.insert(FilterValue::category("Jacket")));
        assert!(!state.insert(FilterValue::category("JACKET")));
        assert_eq!(state.category, vec!["jacket"]);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_set_and_remove() {
        let mut state = FilterState::new();
        let value = FilterValue::Price(PriceRange::bounded(101.0, 200.0));
        assert!(state.set(value.clone(), true));
        assert!(state.contains(&value));
        assert!(state.set(value.clone(), false));
        assert!(!state.contains(&value));
        assert!(!state.remove(&value));
    }

    #[test]
    fn test_values_order() {
        let mut state = FilterState::new();
        state.insert(FilterValue::Availability(Availability::InStock));
        state.insert(FilterValue::category("Pants"));
        state.insert(FilterValue::Price(PriceRange::open(501.0)));
        let dims: Vec<_> = state.values().iter().map(FilterValue::dimension).collect();
        assert_eq!(
            dims,
            vec![
                FilterDimension::Price,
                FilterDimension::Category,
                FilterDimension::Availability
            ]
        );
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_availability_slugs() {
        assert_eq!(Availability::from_slug("InStock"), Some(Availability::InStock));
        assert_eq!(
            Availability::from_slug(" outofstock "),
            Some(Availability::OutOfStock)
        );
        assert_eq!(Availability::from_slug("backorder"), None);
    }
}
