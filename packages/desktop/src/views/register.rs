use dioxus::prelude::*;
use ui::views::RegisterView;

use super::use_redirect;
use crate::Route;

/// Registration; a successful sign-up goes back to login.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let redirect = use_redirect();

    rsx! {
        RegisterView {
            on_redirect: redirect,
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
