use api::models::Restaurant;
use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::status::LoadStatus;
use crate::{use_clients, use_loader, Icon, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Every restaurant in the catalog.
#[component]
pub fn RestaurantsView(
    on_select: EventHandler<String>,
    on_back: EventHandler<()>,
    on_profile: EventHandler<()>,
) -> Element {
    let catalog = use_clients().catalog;
    let restaurants = use_loader((), move |()| {
        let api = catalog.clone();
        async move { api.restaurants().await }
    });

    let state = restaurants.state();
    let state = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar { title: "Restaurantes", on_back, on_profile }
        main {
            class: "page",
            LoadStatus { loading: state.is_loading(), error: state.error.clone() }
            if let Some(list) = state.data() {
                div {
                    class: "card-grid",
                    for restaurant in list.iter().cloned() {
                        RestaurantCard { key: "{restaurant.id}", restaurant, on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn RestaurantCard(restaurant: Restaurant, on_select: EventHandler<String>) -> Element {
    let id = restaurant.id.clone();
    rsx! {
        div {
            class: "card card--clickable",
            onclick: move |_| on_select.call(id.clone()),
            if !restaurant.image.is_empty() {
                img { class: "card__image", src: "{restaurant.image}", alt: "{restaurant.name}" }
            }
            div {
                class: "card__body",
                h3 { "{restaurant.name}" }
                p { class: "muted", "{restaurant.description}" }
                span {
                    class: "rating",
                    Icon { icon: FaStar, width: 14, height: 14 }
                    " {restaurant.rating}"
                }
            }
        }
    }
}
