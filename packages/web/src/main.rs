use api::Redirect;
use dioxus::prelude::*;

use ui::{ClientsProvider, SessionProvider};
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
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ClientsProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirects_map_to_routes() {
        assert_eq!(Route::from(Redirect::Login), Route::Login {});
        assert_eq!(Route::from(Redirect::Home), Route::Home {});
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Register {}.to_string(), "/cadastro");
        assert_eq!(
            Route::Restaurant { id: "3".into() }.to_string(),
            "/restaurant/3"
        );
        assert_eq!(Route::Food { id: "7".into() }.to_string(), "/food/7");
    }
}
