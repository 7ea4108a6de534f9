//! Startup sequence.
//!
//! Waits for the DOM, gives sibling scripts a fixed grace period, then
//! reads the page (mount point, products, query string) and mounts the app.

use crp_filter_core::{page::client_page_class, parse_query};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::app;
use crate::config::{DEFAULT_UPDATE_MODE, INIT_DELAY_MS, UPDATE_MODE_ATTR};
use crate::models::UpdateMode;
use crate::utils::{dom, log};

/// Schedule initialization after DOM readiness plus [`INIT_DELAY_MS`].
pub fn run() {
    spawn_local(async {
        dom::dom_ready().await;
        log::info(format!("DOM ready, initializing in {}ms", INIT_DELAY_MS));
        TimeoutFuture::new(INIT_DELAY_MS).await;
        init();
    });
}

fn update_mode(mount: &HtmlElement) -> UpdateMode {
    match mount.get_attribute(UPDATE_MODE_ATTR) {
        None => DEFAULT_UPDATE_MODE,
        Some(raw) => UpdateMode::from_attr(&raw).unwrap_or_else(|| {
            log::warn(format!(
                "Unknown {} '{}', using {}",
                UPDATE_MODE_ATTR,
                raw,
                DEFAULT_UPDATE_MODE.as_str()
            ));
            DEFAULT_UPDATE_MODE
        }),
    }
}

fn init() {
    if let Some(class) = client_page_class(&dom::location_pathname()) {
        match dom::add_body_class(&class) {
            Ok(()) => log::info(format!("Added page class {}", class)),
            Err(e) => log::warn(e.to_string()),
        }
    }

    let mount = match dom::find_mount() {
        Ok(mount) => mount,
        Err(e) => {
            log::error(format!("{}; filtering will not be initialized", e));
            return;
        }
    };

    let mode = update_mode(&mount);

    let products = match dom::read_products() {
        Ok(catalog) => {
            for skipped in &catalog.skipped {
                log::warn(skipped.to_string());
            }
            catalog.products
        }
        Err(e) => {
            log::error(format!("{}; showing an empty catalog", e));
            Vec::new()
        }
    };

    let parsed = parse_query(&dom::location_search());
    for error in &parsed.errors {
        log::warn(format!("Ignoring URL filter: {}", error));
    }
    let initial = parsed.state;

    log::info(format!(
        "Mode {}, {} products, {} active filters",
        mode.as_str(),
        products.len(),
        initial.len()
    ));

    match dom::reposition_sidebar() {
        Ok(true) => log::info("Filter sidebar repositioned"),
        Ok(false) => {}
        Err(e) => log::warn(format!("Sidebar not moved: {}", e)),
    }

    let results_slot = dom::take_host_grid(&mount).unwrap_or_else(|e| {
        log::warn(format!("Host grid not replaced: {}", e));
        None
    });
    if results_slot.is_some() {
        log::info("Rendering results in place of the host grid");
    }

    // Server-rendered placeholders are replaced by the app.
    mount.set_inner_html("");
    app::mount(mount, results_slot, products, initial, mode);
}
