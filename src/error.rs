//! Error types for browser-side operations.
//!
//! Every variant degrades to "filter not applied" at the call site; none of
//! them reach the shopper.

use std::fmt;

/// Errors raised while talking to the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    /// Browser window not available
    NoWindow,
    /// Document not available
    NoDocument,
    /// A required element is missing from the page
    ContainerMissing(String),
    /// The product global is not defined
    ProductsMissing,
    /// The product global could not be decoded
    ProductsInvalid(String),
    /// Changing the location or history failed
    NavigationFailed(String),
    /// Any other DOM call threw
    OperationFailed(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NoDocument => write!(f, "Document not available"),
            Self::ContainerMissing(selector) => {
                write!(f, "Element '{}' not found", selector)
            }
            Self::ProductsMissing => write!(
                f,
                "window.{} is not loaded",
                crate::config::PRODUCTS_GLOBAL
            ),
            Self::ProductsInvalid(msg) => write!(f, "Invalid product data: {}", msg),
            Self::NavigationFailed(msg) => write!(f, "Navigation failed: {}", msg),
            Self::OperationFailed(msg) => write!(f, "DOM operation failed: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}
