//! Filter sidebar component.
//!
//! Renders one checkbox group per filter dimension. Checkboxes are bound to
//! the filter signal, so removing a value anywhere else unchecks them.

use crp_filter_core::{FilterDimension, FilterOption, options_for};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::StorefrontContext;
use crate::components::SelectedFilters;
use crate::components::icons as ic;
use crate::config::MOBILE_MEDIA_QUERY;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Group order in the sidebar.
const GROUPS: [FilterDimension; 3] = [
    FilterDimension::Category,
    FilterDimension::Price,
    FilterDimension::Availability,
];

/// Sidebar with selected tags and the three option groups.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (>= 768px) | Groups always visible |
/// | Mobile (< 768px) | Groups collapsed behind a "Filters" toggle |
#[component]
pub fn FilterSidebar() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");

    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);
    let expanded = RwSignal::new(false);
    let groups_visible = move || !is_mobile.get() || expanded.get();
    let active_count = Signal::derive(move || ctx.filters.with(|f| f.len()));

    let toggle = move |_: leptos::ev::MouseEvent| expanded.update(|e| *e = !*e);

    view! {
        <aside class=css::sidebar aria-label="Product filters">
            <SelectedFilters />

            <Show when=move || is_mobile.get()>
                <button
                    class=css::toggle
                    on:click=toggle
                    aria-expanded=move || expanded.get().to_string()
                >
                    <Icon icon=ic::FILTERS />
                    <span>"Filters"</span>
                    <Show when=move || { active_count.get() > 0 }>
                        <span class=css::badge>{move || active_count.get()}</span>
                    </Show>
                    {move || if expanded.get() {
                        view! { <Icon icon=ic::CHEVRON_UP /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                    }}
                </button>
            </Show>

            <div
                class=css::groups
                style:display=move || if groups_visible() { "" } else { "none" }
            >
                {GROUPS
                    .into_iter()
                    .map(|dimension| view! { <FilterGroup dimension=dimension /> })
                    .collect_view()}
            </div>
        </aside>
    }
}

#[component]
fn FilterGroup(dimension: FilterDimension) -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");
    let options = ctx.products.with_value(|p| options_for(dimension, p));

    view! {
        <div class=css::group data-filter-type=dimension.group_key()>
            <h4 class=css::heading>{dimension.heading()}</h4>
            <ul class=format!("filter-options-list {}", css::options)>
                {options
                    .into_iter()
                    .map(|option| view! { <FilterCheckbox option=option /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn FilterCheckbox(option: FilterOption) -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");

    let id = option.dom_id();
    let (data_min, data_max) = option.price_bounds().unzip();
    let filter_type = option.dimension().key();
    let label = option.label.clone();
    let attr_value = option.attr_value.clone();
    let value = option.value.clone();

    let checked = Signal::derive(move || ctx.filters.with(|f| option.is_checked(f)));

    let on_change = move |ev: leptos::ev::Event| {
        ctx.toggle(value.clone(), event_target_checked(&ev));
    };

    view! {
        <li class=css::option>
            <input
                type="checkbox"
                id=id.clone()
                data-filter-type=filter_type
                value=attr_value
                data-min=data_min
                data-max=data_max
                prop:checked=checked
                on:change=on_change
            />
            <label for=id>{label}</label>
        </li>
    }
}
