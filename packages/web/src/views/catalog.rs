use dioxus::prelude::*;
use ui::views::{FoodView, RestaurantView, RestaurantsView};

use crate::Route;

#[component]
pub fn Restaurants() -> Element {
    let nav = use_navigator();

    rsx! {
        RestaurantsView {
            on_select: move |id: String| {
                nav.push(Route::Restaurant { id });
            },
            on_back: move |_| nav.go_back(),
            on_profile: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}

#[component]
pub fn Restaurant(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        RestaurantView {
            id,
            on_order: move |food: String| {
                nav.push(Route::Food { id: food });
            },
            on_back: move |_| nav.go_back(),
            on_profile: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}

#[component]
pub fn Food(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        FoodView {
            id,
            on_back: move |_| nav.go_back(),
            on_profile: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}
