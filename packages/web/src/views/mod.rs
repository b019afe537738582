//! Route components. Each one hands navigation callbacks to the shared view
//! in `ui::views`.

use api::Redirect;
use dioxus::prelude::*;

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod catalog;
pub use catalog::{Food, Restaurant, Restaurants};

mod profile;
pub use profile::Profile;

/// Replace the current entry so the back button skips the gated page.
pub(crate) fn use_redirect() -> impl Fn(Redirect) + Copy + 'static {
    let nav = use_navigator();
    move |redirect: Redirect| {
        nav.replace(Route::from(redirect));
    }
}
