//! Product results: count label, grid and empty-state message.
//!
//! The grid is rebuilt from the catalog on every filter change. Each card
//! carries its product id in `data-product-id`. On storefront pages this
//! renders where the server-rendered grid was (see `dom::take_host_grid`).

use crp_filter_core::Product;
use crp_filter_core::format::{format_price, result_count_text, stock_label};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::StorefrontContext;
use crate::components::icons as ic;
use crate::config::{NO_PRODUCTS_TEXT, PLACEHOLDER_IMAGE, VIEW_PRODUCT_LABEL, dom_ids};

stylance::import_crate_style!(css, "src/components/results/results.module.css");

#[component]
pub fn ProductResults() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext must be provided");

    let visible = Memo::new(move |_| ctx.visible_products());
    let count = move || visible.with(Vec::len);

    view! {
        <section class=css::results>
            <p class=format!("{} {}", dom_ids::RESULT_COUNT, css::count)>
                {move || result_count_text(count())}
            </p>

            <ul
                class=format!("products {}", css::grid)
                style:display=move || if count() == 0 { "none" } else { "" }
            >
                <For
                    each=move || visible.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </ul>

            <Show when=move || count() == 0>
                <p id=dom_ids::NO_PRODUCTS_MESSAGE class=css::empty>
                    {NO_PRODUCTS_TEXT}
                </p>
            </Show>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image = product
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let price = format_price(&product.price);
    let regular = product
        .is_on_sale()
        .then(|| product.regular_price.as_deref().map(format_price))
        .flatten();
    let stock_class = if product.in_stock {
        css::inStock
    } else {
        css::outOfStock
    };

    view! {
        <li class=format!("product {}", css::card) data-product-id=product.id.to_string()>
            <img class=css::image src=image alt=product.title.clone() loading="lazy" />
            <div class=css::caption>{product.title.clone()}</div>
            <div class=css::price>
                {regular.map(|r| view! { <del class=css::regular>{r}</del> })}
                <span>{price}</span>
            </div>
            {match product.permalink.clone() {
                Some(href) => view! {
                    <a class=format!("button {}", css::button) href=href target="_blank" rel="noopener">
                        {VIEW_PRODUCT_LABEL}
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                }
                .into_any(),
                None => view! {
                    <span class=format!("button {}", css::buttonDisabled)>{VIEW_PRODUCT_LABEL}</span>
                }
                .into_any(),
            }}
            <div class=format!("{} {}", css::stock, stock_class)>{stock_label(&product)}</div>
        </li>
    }
}
