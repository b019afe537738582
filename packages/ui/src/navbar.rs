use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaUser};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar shared by the catalog and table pages.
///
/// `on_back` adds a back arrow, `on_profile` the profile shortcut on the
/// right. Extra controls (logout, links) go in `children`.
#[component]
pub fn Navbar(
    title: String,
    on_back: Option<EventHandler<()>>,
    on_profile: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            if let Some(back) = on_back {
                button {
                    class: "icon-button navbar__back",
                    title: "Voltar",
                    onclick: move |_| back.call(()),
                    Icon { icon: FaArrowLeft, width: 18, height: 18 }
                }
            }
            h1 { class: "navbar__title", "{title}" }
            div {
                class: "navbar__actions",
                {children}
                if let Some(profile) = on_profile {
                    button {
                        class: "avatar-button",
                        title: "Perfil",
                        onclick: move |_| profile.call(()),
                        Icon { icon: FaUser, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
