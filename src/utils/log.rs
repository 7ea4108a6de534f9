//! Console logging with a common prefix.

use crate::config::LOG_PREFIX;

fn prefixed(message: &str) -> wasm_bindgen::JsValue {
    format!("{} {}", LOG_PREFIX, message).into()
}

pub fn info(message: impl AsRef<str>) {
    web_sys::console::log_1(&prefixed(message.as_ref()));
}

pub fn warn(message: impl AsRef<str>) {
    web_sys::console::warn_1(&prefixed(message.as_ref()));
}

pub fn error(message: impl AsRef<str>) {
    web_sys::console::error_1(&prefixed(message.as_ref()));
}
