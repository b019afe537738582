use dioxus::prelude::*;
use ui::views::ProfileView;

use super::use_redirect;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    let redirect = use_redirect();

    rsx! {
        ProfileView {
            on_redirect: redirect,
            on_back: move |_| nav.go_back(),
        }
    }
}
