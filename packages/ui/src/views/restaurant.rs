use api::models::{format_brl, Food};
use dioxus::prelude::*;

use crate::icons::{FaClock, FaStar, FaTruck};
use crate::status::LoadStatus;
use crate::{use_clients, use_loader, Icon, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// One restaurant and its menu.
///
/// Two independent loaders keyed by `id`: the restaurant record and the
/// menu items filtered to this restaurant. Both re-run when `id` changes.
#[component]
pub fn RestaurantView(
    id: String,
    on_order: EventHandler<String>,
    on_back: EventHandler<()>,
    on_profile: EventHandler<()>,
) -> Element {
    let clients = use_clients();
    let restaurant_api = clients.catalog.clone();
    let restaurant = use_loader(id.clone(), move |id: String| {
        let api = restaurant_api.clone();
        async move { api.restaurant(&id).await }
    });
    let menu_api = clients.catalog.clone();
    let menu = use_loader(id.clone(), move |id: String| {
        let api = menu_api.clone();
        async move { api.menu_for(&id).await }
    });

    let restaurant = restaurant.state();
    let restaurant = restaurant.read();
    let menu = menu.state();
    let menu = menu.read();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar { title: "Restaurante", on_back, on_profile }
        main {
            class: "page",
            LoadStatus { loading: restaurant.is_loading(), error: restaurant.error.clone() }

            if let Some(r) = restaurant.data() {
                div {
                    class: "card restaurant-header",
                    if !r.image.is_empty() {
                        img { class: "restaurant-header__image", src: "{r.image}", alt: "{r.name}" }
                    }
                    div {
                        h2 { "{r.name}" }
                        p { class: "muted", "{r.description}" }
                        span {
                            class: "rating",
                            Icon { icon: FaStar, width: 16, height: 16 }
                            " {r.rating}"
                        }
                    }
                }
            }

            h3 { class: "section-title", "Menu" }
            LoadStatus { loading: menu.is_loading(), error: menu.error.clone() }
            if let Some(items) = menu.data() {
                div {
                    class: "card-grid",
                    for food in items.iter().cloned() {
                        MenuCard { key: "{food.id}", food, on_order }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuCard(food: Food, on_order: EventHandler<String>) -> Element {
    let id = food.id.clone();
    rsx! {
        div {
            class: "card",
            if !food.image.is_empty() {
                img { class: "card__image", src: "{food.image}", alt: "{food.name}" }
            }
            div {
                class: "card__body",
                h3 { "{food.name}" }
                p { class: "muted", "{food.description}" }
                div {
                    class: "card__row",
                    strong { "{format_brl(food.price)}" }
                    span {
                        class: "rating",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        " {food.rating}"
                    }
                }
                div {
                    class: "card__meta",
                    Icon { icon: FaClock, width: 12, height: 12 }
                    span { " {food.time}" }
                    Icon { icon: FaTruck, width: 12, height: 12 }
                    span { " Delivery: {format_brl(food.delivery)}" }
                }
            }
            button {
                class: "primary wide",
                onclick: move |_| on_order.call(id.clone()),
                "Pedir"
            }
        }
    }
}
