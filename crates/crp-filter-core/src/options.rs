//! Selectable filter options shown in the sidebar.

use crate::filter::{Availability, FilterDimension, FilterState, FilterValue, PriceRange};
use crate::format::{CURRENCY_SYMBOL, format_amount, format_max};
use crate::product::{Product, unique_categories};

/// The six fixed price bands. The last one has no upper bound.
pub const PRICE_RANGES: [PriceRange; 6] = [
    PriceRange::bounded(0.0, 100.0),
    PriceRange::bounded(101.0, 200.0),
    PriceRange::bounded(201.0, 300.0),
    PriceRange::bounded(301.0, 400.0),
    PriceRange::bounded(401.0, 500.0),
    PriceRange::open(501.0),
];

pub const AVAILABILITY_OPTIONS: [Availability; 2] =
    [Availability::InStock, Availability::OutOfStock];

/// A checkbox in one of the sidebar groups.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub value: FilterValue,
    /// Checkbox label, e.g. `R101 - R200`, `Benie`, `In stock`.
    pub label: String,
    /// `value` attribute of the checkbox.
    pub attr_value: String,
}

impl FilterOption {
    pub fn price(range: PriceRange) -> Self {
        let label = match range.max {
            Some(max) => format!(
                "{sym}{} - {sym}{}",
                format_amount(range.min),
                format_amount(max),
                sym = CURRENCY_SYMBOL
            ),
            None => format!("{}{}+", CURRENCY_SYMBOL, format_amount(range.min)),
        };
        Self {
            attr_value: format!("{}-{}", format_amount(range.min), format_max(&range)),
            value: FilterValue::Price(range),
            label,
        }
    }

    pub fn category(name: &str) -> Self {
        let slug = name.trim().to_lowercase();
        Self {
            value: FilterValue::Category(slug.clone()),
            label: name.to_string(),
            attr_value: slug,
        }
    }

    pub fn availability(availability: Availability) -> Self {
        Self {
            value: FilterValue::Availability(availability),
            label: availability.label().to_string(),
            attr_value: availability.slug().to_string(),
        }
    }

    pub fn dimension(&self) -> FilterDimension {
        self.value.dimension()
    }

    /// Checkbox id: `filter-{type}-{value}` with unsafe characters replaced.
    pub fn dom_id(&self) -> String {
        format!(
            "filter-{}-{}",
            self.dimension().key(),
            sanitize_id(&self.attr_value)
        )
    }

    /// `data-min` / `data-max` pair for price checkboxes.
    pub fn price_bounds(&self) -> Option<(String, String)> {
        match &self.value {
            FilterValue::Price(range) => Some((format_amount(range.min), format_max(range))),
            _ => None,
        }
    }

    pub fn is_checked(&self, state: &FilterState) -> bool {
        state.contains(&self.value)
    }
}

/// Options of one sidebar group, in display order.
pub fn options_for(dimension: FilterDimension, products: &[Product]) -> Vec<FilterOption> {
    match dimension {
        FilterDimension::Price => PRICE_RANGES.into_iter().map(FilterOption::price).collect(),
        FilterDimension::Category => unique_categories(products)
            .iter()
            .map(|name| FilterOption::category(name))
            .collect(),
        FilterDimension::Availability => AVAILABILITY_OPTIONS
            .into_iter()
            .map(FilterOption::availability)
            .collect(),
    }
}

/// Replace every character outside `[A-Za-z0-9-]` with `_`.
pub fn sanitize_id(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
