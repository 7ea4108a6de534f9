//! Root application module.
//!
//! Contains the StorefrontContext that every component reads filter state
//! from, the mount entry point and the combined App layout.

use crp_filter_core::{
    FilterState, FilterValue, Product, SelectedTag, filter_products, selected_tags,
};
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use web_sys::HtmlElement;

use crate::components::{FilterSidebar, ProductResults};
use crate::models::UpdateMode;
use crate::sync;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// StorefrontContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<StorefrontContext>()`. The filter signal is the only
/// mutable state; every mutation goes through the methods below so the
/// active update path runs exactly once per change.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles or plain
/// enums, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    /// Active filter selections.
    pub filters: RwSignal<FilterState>,
    /// Catalog snapshot from the host page (never mutated).
    pub products: StoredValue<Vec<Product>>,
    /// Live re-render or URL sync + reload.
    pub mode: UpdateMode,
}

impl StorefrontContext {
    pub fn new(products: Vec<Product>, initial: FilterState, mode: UpdateMode) -> Self {
        Self {
            filters: RwSignal::new(initial),
            products: StoredValue::new(products),
            mode,
        }
    }

    /// Apply a checkbox change.
    pub fn toggle(&self, value: FilterValue, checked: bool) {
        let changed = self
            .filters
            .try_update(|f| f.set(value, checked))
            .unwrap_or(false);
        if changed {
            self.commit();
        }
    }

    /// Remove one value, e.g. from its selected-filter tag.
    pub fn remove(&self, value: &FilterValue) {
        let changed = self
            .filters
            .try_update(|f| f.remove(value))
            .unwrap_or(false);
        if changed {
            self.commit();
        }
    }

    /// Drop every active filter.
    pub fn clear_all(&self) {
        if self.filters.with_untracked(FilterState::is_empty) {
            return;
        }
        self.filters.update(FilterState::clear);
        self.commit();
    }

    /// Products accepted by the current filters (tracked).
    pub fn visible_products(&self) -> Vec<Product> {
        self.filters.with(|f| {
            self.products
                .with_value(|p| filter_products(p, f).into_iter().cloned().collect())
        })
    }

    /// Tags for the current filters (tracked).
    pub fn tags(&self) -> Vec<SelectedTag> {
        self.filters
            .with(|f| self.products.with_value(|p| selected_tags(f, p)))
    }

    fn commit(&self) {
        let state = self.filters.get_untracked();
        sync::apply(&state, self.mode);
    }
}

/// Mount the filter UI.
///
/// With a `results_slot` (the place of the host's product grid) the sidebar
/// mounts into `sidebar` and the results into the slot. Both roots are
/// children of one owner, so they read the same StorefrontContext. Without a
/// slot, [`App`] renders both inside `sidebar`.
pub fn mount(
    sidebar: HtmlElement,
    results_slot: Option<HtmlElement>,
    products: Vec<Product>,
    initial: FilterState,
    mode: UpdateMode,
) {
    let owner = Owner::new();
    owner.with(move || {
        provide_context(StorefrontContext::new(products, initial, mode));
        match results_slot {
            Some(slot) => {
                mount_to(sidebar, || view! { <FilterSidebar /> }).forget();
                mount_to(slot, || view! { <ProductResults /> }).forget();
            }
            None => mount_to(sidebar, || view! { <App /> }).forget(),
        }
    });
    // Mounted for the page's lifetime.
    std::mem::forget(owner);
}

/// Sidebar next to results, for pages without a server-rendered grid.
///
/// Expects a StorefrontContext in scope.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class=css::layout>
            <FilterSidebar />
            <ProductResults />
        </div>
    }
}
