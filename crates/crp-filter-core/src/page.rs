//! Shop pagination detection from the URL path.

use std::sync::LazyLock;

use regex::Regex;

// ASCII digit class: the workspace builds `regex` without `unicode-perl`.
static SHOP_PAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/shop/page/([0-9]+)/").ok());

/// Page number from a `/shop/page/N/` path.
pub fn shop_page_number(path: &str) -> Option<u32> {
    SHOP_PAGE
        .as_ref()?
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Body class for paginated shop pages, `client-paged-N`, from page 2 on.
pub fn client_page_class(path: &str) -> Option<String> {
    shop_page_number(path)
        .filter(|&n| n > 1)
        .map(|n| format!("client-paged-{}", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_page_number() {
        assert_eq!(shop_page_number("/shop/page/3/"), Some(3));
        assert_eq!(shop_page_number("/en/shop/page/12/?orderby=price"), Some(12));
        assert_eq!(shop_page_number("/shop/"), None);
        assert_eq!(shop_page_number("/shop/page/3"), None);
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(SHOP_PAGE.is_some());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(shop_page_number("/shop/page/\u{0663}/"), None);
    }

    #[test]
    fn test_client_page_class() {
        assert_eq!(client_page_class("/shop/page/2/").as_deref(), Some("client-paged-2"));
        assert_eq!(client_page_class("/shop/page/1/"), None);
        assert_eq!(client_page_class("/product/benie-blue/"), None);
    }
}
