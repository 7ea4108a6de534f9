//! Product records delivered by the host page.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CatalogError;

/// A product snapshot as embedded by the storefront.
///
/// Only `id`, `price`, `in_stock` and `categories` drive filtering; the
/// other fields feed the product card. Everything but `id` tolerates
/// `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "product_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Numeric string, e.g. `"300"`. JSON numbers are accepted too.
    #[serde(default, deserialize_with = "price_string")]
    pub price: String,
    #[serde(default, deserialize_with = "optional_price_string")]
    pub regular_price: Option<String>,
    #[serde(default, deserialize_with = "optional_price_string")]
    pub sale_price: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "optional_quantity")]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Category names. Non-string entries are dropped; a non-array is empty.
    #[serde(default, deserialize_with = "category_list")]
    pub categories: Vec<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A decoded catalog plus the records that could not be read.
#[derive(Debug, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub skipped: Vec<CatalogError>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn optional_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Float(f64),
    Text(String),
}

// Ids may arrive as `79`, `79.0` or `"79"`.
fn product_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    use serde::de::Error;

    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        RawId::Float(f) => Err(D::Error::custom(format!("invalid product id {}", f))),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid product id '{}'", s))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

impl From<RawPrice> for String {
    fn from(raw: RawPrice) -> Self {
        match raw {
            RawPrice::Text(s) => s,
            RawPrice::Number(n) => n.to_string(),
        }
    }
}

fn price_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<RawPrice>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn optional_price_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawPrice>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.trim().is_empty()))
}

impl Product {
    /// Numeric price, or `None` when the price string does not parse.
    pub fn price_value(&self) -> Option<f64> {
        parse_amount(&self.price)
    }

    /// Whether the product carries a sale price below its regular price.
    pub fn is_on_sale(&self) -> bool {
        let sale = self.sale_price.as_deref().and_then(parse_amount);
        let regular = self.regular_price.as_deref().and_then(parse_amount);
        matches!((sale, regular), (Some(s), Some(r)) if s < r)
    }

    /// Case-insensitive category membership.
    pub fn has_category(&self, slug: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.to_lowercase() == slug.to_lowercase())
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode a JSON array of products.
///
/// Fails only when the payload is not an array. Records that do not decode
/// are collected in [`Catalog::skipped`] and the rest are kept.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    Ok(decode_products(records))
}

/// Decode already-parsed records one by one.
pub fn decode_products(records: Vec<Value>) -> Catalog {
    let mut catalog = Catalog::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Product>(record) {
            Ok(product) => catalog.products.push(product),
            Err(source) => catalog.skipped.push(CatalogError::Record { index, source }),
        }
    }
    catalog
}

/// Distinct category names across the catalog, original casing, sorted.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Look up a category's display name by its lowercase slug.
pub fn category_label(products: &[Product], slug: &str) -> Option<String> {
    products
        .iter()
        .flat_map(|p| p.categories.iter())
        .find(|c| c.to_lowercase() == slug)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_string_and_number() {
        let products = parse_catalog(
            r#"[{"id":1,"price":"300","in_stock":true,"categories":["Benie"]},
                {"id":2,"price":150.5,"in_stock":false}]"#,
        )
        .unwrap()
        .products;
        assert_eq!(products[0].price, "300");
        assert_eq!(products[0].price_value(), Some(300.0));
        assert_eq!(products[1].price, "150.5");
        assert!(products[1].categories.is_empty());
    }

    #[test]
    fn test_unparsable_price() {
        let p = Product {
            price: "call us".to_string(),
            ..Default::default()
        };
        assert_eq!(p.price_value(), None);
    }

    #[test]
    fn test_empty_sale_price_is_none() {
        let products = parse_catalog(
            r#"[{"id":79,"price":"300","regular_price":"300","sale_price":"","in_stock":true}]"#,
        )
        .unwrap()
        .products;
        assert_eq!(products[0].sale_price, None);
        assert!(!products[0].is_on_sale());
    }

    #[test]
    fn test_on_sale() {
        let p = Product {
            price: "80".to_string(),
            regular_price: Some("100".to_string()),
            sale_price: Some("80".to_string()),
            ..Default::default()
        };
        assert!(p.is_on_sale());
    }

    #[test]
    fn test_has_category_case_insensitive() {
        let p = Product {
            categories: vec!["Jacket".to_string()],
            ..Default::default()
        };
        assert!(p.has_category("jacket"));
        assert!(p.has_category("JACKET"));
        assert!(!p.has_category("pants"));
    }

    #[test]
    fn test_unique_categories_sorted() {
        let products = vec![
            Product {
                categories: vec!["Pants".to_string()],
                ..Default::default()
            },
            Product {
                categories: vec!["Benie".to_string(), "Pants".to_string()],
                ..Default::default()
            },
        ];
        assert_eq!(unique_categories(&products), vec!["Benie", "Pants"]);
        assert_eq!(category_label(&products, "benie").as_deref(), Some("Benie"));
        assert_eq!(category_label(&products, "hats"), None);
    }

    #[test]
    fn test_invalid_catalog() {
        assert!(matches!(
            parse_catalog("{\"id\":1}"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let catalog = parse_catalog(
            r#"[{"id":7,"title":null,"price":null,"in_stock":null,"categories":null,
                 "sku":null,"image":null}]"#,
        )
        .unwrap();
        assert!(catalog.skipped.is_empty());
        let p = &catalog.products[0];
        assert_eq!(p.id, 7);
        assert_eq!(p.title, "");
        assert_eq!(p.price, "");
        assert!(!p.in_stock);
        assert!(p.categories.is_empty());
        assert_eq!(p.image, None);
        assert_eq!(p.stock_quantity, None);
    }

    #[test]
    fn test_stock_quantity_forms() {
        let catalog =
            parse_catalog(r#"[{"id":1,"stock_quantity":4},{"id":2,"stock_quantity":5.0},
                              {"id":3,"stock_quantity":"many"}]"#)
                .unwrap();
        let quantities: Vec<_> = catalog.products.iter().map(|p| p.stock_quantity).collect();
        assert_eq!(quantities, vec![Some(4), Some(5), None]);
    }

    #[test]
    fn test_odd_categories() {
        let catalog = parse_catalog(
            r#"[{"id":1,"categories":"Benie"},
                {"id":2,"categories":["Pants",null,3,"Jacket"]}]"#,
        )
        .unwrap();
        assert!(catalog.products[0].categories.is_empty());
        assert_eq!(catalog.products[1].categories, vec!["Pants", "Jacket"]);
    }

    #[test]
    fn test_id_forms() {
        let catalog = parse_catalog(r#"[{"id":79.0},{"id":"80"},{"id":1.5},{"id":-2}]"#).unwrap();
        let ids: Vec<_> = catalog.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![79, 80]);
        assert_eq!(catalog.skipped.len(), 2);
    }

    #[test]
    fn test_bad_record_is_skipped() {
        let catalog = parse_catalog(
            r#"[{"id":1,"price":"10"},{"title":"no id"},"junk",{"id":2,"in_stock":"yes"},
                {"id":3,"price":"30"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = catalog.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        let skipped: Vec<_> = catalog
            .skipped
            .iter()
            .map(|e| match e {
                CatalogError::Record { index, .. } => *index,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(skipped, vec![1, 2, 3]);
    }
}
