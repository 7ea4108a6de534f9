//! Removable "selected filter" tags.

use crate::filter::{FilterDimension, FilterState, FilterValue};
use crate::format::{format_amount, format_max, price_range_label};
use crate::options::sanitize_id;
use crate::product::{Product, category_label};

/// One active filter value rendered as a removable tag.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedTag {
    pub value: FilterValue,
    /// e.g. `Price: R101-R200`, `Category: Benie`, `Availability: In stock`.
    pub label: String,
    /// e.g. `selected-price-101-200`, `selected-category-benie`.
    pub dom_id: String,
}

impl SelectedTag {
    pub fn dimension(&self) -> FilterDimension {
        self.value.dimension()
    }
}

/// Tags for every active value, in order price, category, availability.
///
/// Category labels use the catalog's original casing when the slug is known.
pub fn selected_tags(state: &FilterState, products: &[Product]) -> Vec<SelectedTag> {
    state
        .values()
        .into_iter()
        .map(|value| tag_for(value, products))
        .collect()
}

fn tag_for(value: FilterValue, products: &[Product]) -> SelectedTag {
    let (label, suffix) = match &value {
        FilterValue::Price(range) => (
            format!("Price: {}", price_range_label(range)),
            format!("{}-{}", format_amount(range.min), format_max(range)),
        ),
        FilterValue::Category(slug) => {
            let name = category_label(products, slug).unwrap_or_else(|| capitalize(slug));
            (format!("Category: {}", name), slug.clone())
        }
        FilterValue::Availability(a) => {
            (format!("Availability: {}", a.label()), a.slug().to_string())
        }
    };
    SelectedTag {
        dom_id: format!("selected-{}-{}", value.dimension().key(), sanitize_id(&suffix)),
        value,
        label,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
