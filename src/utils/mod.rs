//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window/document access, mount lookup, navigation, product global
//! - [`log`] - prefixed console logging

pub mod dom;
pub mod log;
