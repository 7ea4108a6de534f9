//! Selected-filter tags.
//!
//! One removable tag per active value. The section hides itself when no
//! filter is active.

use crp_filter_core::SelectedTag;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::StorefrontContext;
use crate::components::icons as ic;
use crate::config::dom_ids;

stylance::import_crate_style!(css, "src/components/selected/selected.module.css");

#[component]
pub fn SelectedFilters() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");

    let tags = Memo::new(move |_| ctx.tags());
    let has_tags = move || tags.with(|t| !t.is_empty());

    view! {
        <div
            class=format!("{} {}", dom_ids::SELECTED_FILTERS_SECTION, css::section)
            style:display=move || if has_tags() { "block" } else { "none" }
        >
            <h4 class=css::heading>"Selected filters"</h4>
            <ul id=dom_ids::SELECTED_FILTERS_LIST class=css::list>
                <For
                    each=move || tags.get()
                    key=|tag| tag.dom_id.clone()
                    children=move |tag| view! { <FilterTag tag=tag /> }
                />
            </ul>
            <button class=css::clearAll on:click=move |_| ctx.clear_all()>
                "Clear all"
            </button>
        </div>
    }
}

#[component]
fn FilterTag(tag: SelectedTag) -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");

    let filter_type = tag.dimension().key();
    let aria_label = format!("Remove {}", tag.label);
    let value = tag.value;

    view! {
        <li id=tag.dom_id class=css::tag>
            <button
                class=format!("remove-filter {}", css::remove)
                data-filter-type=filter_type
                aria-label=aria_label
                on:click=move |_| ctx.remove(&value)
            >
                <Icon icon=ic::CLOSE />
            </button>
            <span>{tag.label}</span>
        </li>
    }
}
