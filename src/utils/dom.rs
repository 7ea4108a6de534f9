//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use crp_filter_core::{Catalog, decode_products, parse_catalog};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, Window};

use crate::config::{PRODUCTS_GLOBAL, RESULTS_SLOT_CLASS, SIDEBAR_INITIALIZED_CLASS, selectors};
use crate::error::DomError;
use crate::utils::log;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// =============================================================================
// Startup
// =============================================================================

/// Resolve once the document has finished parsing.
pub async fn dom_ready() {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        return;
    }

    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        ) {
            log::error(format!(
                "Cannot listen for DOMContentLoaded ({}); starting now",
                js_message(e)
            ));
            if let Err(e) = resolve.call0(&JsValue::UNDEFINED) {
                log::error(format!("Cannot resolve DOM readiness: {}", js_message(e)));
            }
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::warn(format!("DOM readiness wait failed: {}", js_message(e)));
    }
}

/// Find the element the filter UI mounts into.
///
/// Tries `#crp-filter-container` first, then `.crp-filter-sidebar`.
pub fn find_mount() -> Result<HtmlElement, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    let element = document
        .get_element_by_id(selectors::FILTER_CONTAINER_ID)
        .or_else(|| {
            document
                .query_selector(selectors::FILTER_SIDEBAR)
                .ok()
                .flatten()
        })
        .ok_or_else(|| {
            DomError::ContainerMissing(format!(
                "#{} / {}",
                selectors::FILTER_CONTAINER_ID,
                selectors::FILTER_SIDEBAR
            ))
        })?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::ContainerMissing(selectors::FILTER_CONTAINER_ID.to_string()))
}

/// Read the product array the host page exposes on `window`.
///
/// Accepts either an array of objects or a JSON string holding one. Records
/// that do not decode come back in [`Catalog::skipped`].
pub fn read_products() -> Result<Catalog, DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(PRODUCTS_GLOBAL))
        .map_err(|_| DomError::ProductsMissing)?;

    if value.is_undefined() || value.is_null() {
        return Err(DomError::ProductsMissing);
    }
    if let Some(json) = value.as_string() {
        return parse_catalog(&json).map_err(|e| DomError::ProductsInvalid(e.to_string()));
    }
    if !js_sys::Array::is_array(&value) {
        return Err(DomError::ProductsInvalid("not an array".to_string()));
    }
    let records: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| DomError::ProductsInvalid(e.to_string()))?;
    Ok(decode_products(records))
}

// =============================================================================
// Page Layout
// =============================================================================

/// Add a class to `<body>`.
pub fn add_body_class(class: &str) -> Result<(), DomError> {
    let body = document()
        .ok_or(DomError::NoDocument)?
        .body()
        .ok_or_else(|| DomError::ContainerMissing("body".to_string()))?;
    body.class_list()
        .add_1(class)
        .map_err(|e| DomError::OperationFailed(js_message(e)))
}

/// Move the filter sidebar in front of `#primary` inside `.col-full`.
///
/// Runs once per sidebar; returns `Ok(false)` when the theme wrappers are
/// absent or the sidebar was already placed.
pub fn reposition_sidebar() -> Result<bool, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    let query =
        |selector: &str| -> Option<Element> { document.query_selector(selector).ok().flatten() };

    let (Some(col_full), Some(primary), Some(sidebar)) = (
        query(selectors::COL_FULL),
        document.get_element_by_id(selectors::PRIMARY_ID),
        query(selectors::FILTER_SIDEBAR),
    ) else {
        return Ok(false);
    };
    if sidebar.class_list().contains(SIDEBAR_INITIALIZED_CLASS) {
        return Ok(false);
    }

    col_full
        .insert_before(&sidebar, Some(&*primary))
        .map_err(|e| DomError::OperationFailed(js_message(e)))?;
    if let Err(e) = sidebar.class_list().add_1(SIDEBAR_INITIALIZED_CLASS) {
        log::warn(format!(
            "Sidebar moved but not marked {}: {}",
            SIDEBAR_INITIALIZED_CLASS,
            js_message(e)
        ));
    }
    Ok(true)
}

/// Replace the server-rendered product grid with an empty slot.
///
/// The host `ul.products` and every `.woocommerce-result-count` are removed
/// and a `div.crp-filter-results` takes the grid's place. Returns `Ok(None)`
/// when the page has no grid outside `mount`.
pub fn take_host_grid(mount: &HtmlElement) -> Result<Option<HtmlElement>, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    let Some(grid) = document
        .query_selector(selectors::HOST_GRID)
        .ok()
        .flatten()
        .filter(|grid| !mount.contains(Some(&**grid)))
    else {
        return Ok(None);
    };
    let parent = grid
        .parent_node()
        .ok_or_else(|| DomError::ContainerMissing(selectors::HOST_GRID.to_string()))?;

    let slot = document
        .create_element("div")
        .map_err(|e| DomError::OperationFailed(js_message(e)))?;
    slot.set_class_name(RESULTS_SLOT_CLASS);
    parent
        .insert_before(&slot, Some(&*grid))
        .map_err(|e| DomError::OperationFailed(js_message(e)))?;
    grid.remove();

    let counts = document
        .query_selector_all(selectors::HOST_RESULT_COUNT)
        .map_err(|e| DomError::OperationFailed(js_message(e)))?;
    for i in 0..counts.length() {
        if let Some(count) = counts
            .item(i)
            .and_then(|n| n.dyn_into::<Element>().ok())
            .filter(|count| !mount.contains(Some(&**count)))
        {
            count.remove();
        }
    }

    slot.dyn_into::<HtmlElement>()
        .map(Some)
        .map_err(|_| DomError::OperationFailed(RESULTS_SLOT_CLASS.to_string()))
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.search`, including the leading `?` when present.
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Current `location.pathname`.
pub fn location_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Current `location.hash`, including the `#` when present.
pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Replace the current page (no history entry) and load `url`.
pub fn replace_location(url: &str) -> Result<(), DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    window
        .location()
        .replace(url)
        .map_err(|e| DomError::NavigationFailed(js_message(e)))
}

/// Replace the current history entry's URL without reloading.
pub fn replace_history_url(url: &str) -> Result<(), DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let history = window
        .history()
        .map_err(|e| DomError::NavigationFailed(js_message(e)))?;
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .map_err(|e| DomError::NavigationFailed(js_message(e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(html: &str) -> (HtmlElement, HtmlElement) {
        let document = document().unwrap();
        let body = document.body().unwrap();
        body.set_inner_html(html);
        let mount = document
            .get_element_by_id(selectors::FILTER_CONTAINER_ID)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        (body, mount)
    }

    #[wasm_bindgen_test]
    fn test_take_host_grid_replaces_grid_and_count() {
        let (body, mount) = fixture(
            r#"<div id="primary">
                 <div id="crp-filter-container"></div>
                 <main>
                   <p class="woocommerce-result-count">Showing all 12 results</p>
                   <ul class="products"><li class="product post-79"></li></ul>
                 </main>
               </div>"#,
        );

        let slot = take_host_grid(&mount).unwrap().expect("host grid present");
        assert_eq!(slot.class_name(), RESULTS_SLOT_CLASS);
        assert!(body.query_selector("ul.products").unwrap().is_none());
        assert!(body
            .query_selector(".woocommerce-result-count")
            .unwrap()
            .is_none());
        assert_eq!(
            slot.parent_element().unwrap().tag_name().to_lowercase(),
            "main"
        );
    }

    #[wasm_bindgen_test]
    fn test_take_host_grid_without_grid() {
        let (_, mount) = fixture(r#"<div id="crp-filter-container"></div>"#);
        assert!(take_host_grid(&mount).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_grid_inside_mount_is_not_a_host_grid() {
        let (_, mount) = fixture(
            r#"<div id="crp-filter-container"><ul class="products"></ul></div>"#,
        );
        assert!(take_host_grid(&mount).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dom_ready_returns_once_loaded() {
        dom_ready().await;
        assert_ne!(document().unwrap().ready_state(), "loading");
    }

    #[wasm_bindgen_test]
    fn test_reposition_sidebar_marks_once() {
        let (body, _) = fixture(
            r#"<div class="col-full">
                 <div id="primary">
                   <div class="crp-filter-sidebar"><div id="crp-filter-container"></div></div>
                 </div>
               </div>"#,
        );
        assert_eq!(reposition_sidebar(), Ok(true));
        let sidebar = body.query_selector(".crp-filter-sidebar").unwrap().unwrap();
        assert!(sidebar.class_list().contains(SIDEBAR_INITIALIZED_CLASS));
        assert_eq!(
            sidebar.next_element_sibling().map(|e| e.id()).as_deref(),
            Some("primary")
        );
        assert_eq!(reposition_sidebar(), Ok(false));
    }
}
