//! Display formatting for prices, price bands and result counts.

use crate::filter::PriceRange;
use crate::product::Product;

/// Currency symbol prefixed to every amount.
pub const CURRENCY_SYMBOL: &str = "R";

/// Query/attribute spelling of an unbounded upper price.
pub const UNBOUNDED_SENTINEL: &str = "Infinity";

/// Format a number without a trailing `.0` for whole values.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Upper bound as written in URLs and data attributes.
pub fn format_max(range: &PriceRange) -> String {
    range
        .max
        .map(format_amount)
        .unwrap_or_else(|| UNBOUNDED_SENTINEL.to_string())
}

/// Compact band label used on selected-filter tags, e.g. `R101-R200`, `R501+`.
pub fn price_range_label(range: &PriceRange) -> String {
    match range.max {
        Some(max) => format!(
            "{sym}{}-{sym}{}",
            format_amount(range.min),
            format_amount(max),
            sym = CURRENCY_SYMBOL
        ),
        None => format!("{}{}+", CURRENCY_SYMBOL, format_amount(range.min)),
    }
}

/// Card price, e.g. `R300,00` or `-R0,50`. Unparsable prices are shown as given.
pub fn format_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let cents = (value * 100.0).round() as i64;
            let sign = if cents < 0 { "-" } else { "" };
            let cents = cents.unsigned_abs();
            format!("{}{}{},{:02}", sign, CURRENCY_SYMBOL, cents / 100, cents % 100)
        }
        _ => format!("{}{}", CURRENCY_SYMBOL, raw.trim()),
    }
}

/// Card stock label.
pub fn stock_label(product: &Product) -> &'static str {
    if product.in_stock {
        "In stock"
    } else {
        "Out of stock"
    }
}

/// Text of the result-count label.
pub fn result_count_text(count: usize) -> String {
    match count {
        0 => "No products found".to_string(),
        1 => "Showing the single result".to_string(),
        n => format!("Showing all {} results", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(99.5), "99.5");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_price_range_label() {
        assert_eq!(
            price_range_label(&PriceRange::bounded(101.0, 200.0)),
            "R101-R200"
        );
        assert_eq!(price_range_label(&PriceRange::open(501.0)), "R501+");
    }

    #[test]
    fn test_format_max() {
        assert_eq!(format_max(&PriceRange::bounded(0.0, 100.0)), "100");
        assert_eq!(format_max(&PriceRange::open(501.0)), "Infinity");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("300"), "R300,00");
        assert_eq!(format_price("19.9"), "R19,90");
        assert_eq!(format_price("free"), "Rfree");
    }

    #[test]
    fn test_format_negative_price() {
        assert_eq!(format_price("-0.5"), "-R0,50");
        assert_eq!(format_price("-12.3"), "-R12,30");
        assert_eq!(format_price("-0.001"), "R0,00");
    }

    #[test]
    fn test_result_count_text() {
        assert_eq!(result_count_text(0), "No products found");
        assert_eq!(result_count_text(1), "Showing the single result");
        assert_eq!(result_count_text(12), "Showing all 12 results");
    }
}
