use dioxus::prelude::*;
use ui::views::LoginView;

use super::use_redirect;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let redirect = use_redirect();

    rsx! {
        LoginView {
            on_redirect: redirect,
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
