use api::Redirect;
use dioxus::prelude::*;
use views::{Food, Home, Login, Profile, Register, Restaurant, Restaurants};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/cadastro")]
    Register {},
    #[route("/restaurants")]
    Restaurants {},
    #[route("/restaurant/:id")]
    Restaurant { id: String },
    #[route("/food/:id")]
    Food { id: String },
    #[route("/profile")]
    Profile {},
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Login => Route::Login {},
            Redirect::Home => Route::Home {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::ClientsProvider {
            ui::SessionProvider {
                Router::<Route> {}
            }
        }
    }
}
