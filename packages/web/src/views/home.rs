use dioxus::prelude::*;
use ui::views::HomeView;

use super::use_redirect;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let redirect = use_redirect();

    rsx! {
        HomeView {
            on_redirect: redirect,
            on_profile: move |_| {
                nav.push(Route::Profile {});
            },
            on_restaurants: move |_| {
                nav.push(Route::Restaurants {});
            },
        }
    }
}
