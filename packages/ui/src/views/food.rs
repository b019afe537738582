use api::models::{format_brl, Quantity};
use dioxus::prelude::*;

use crate::icons::{FaClock, FaMinus, FaPlus, FaStar, FaTruck};
use crate::status::LoadStatus;
use crate::{use_clients, use_loader, Icon, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// One menu item with a quantity stepper and the order total.
#[component]
pub fn FoodView(id: String, on_back: EventHandler<()>, on_profile: EventHandler<()>) -> Element {
    let catalog = use_clients().catalog;
    let food = use_loader(id, move |id: String| {
        let api = catalog.clone();
        async move { api.food(&id).await }
    });
    let mut quantity = use_signal(Quantity::default);

    let state = food.state();
    let state = state.read();
    let title = state
        .data()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "Produto".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar { title, on_back, on_profile }
        main {
            class: "page page--narrow",
            LoadStatus { loading: state.is_loading(), error: state.error.clone() }

            if let Some(item) = state.data() {
                div {
                    class: "card",
                    if !item.image.is_empty() {
                        img { class: "card__image card__image--large", src: "{item.image}", alt: "{item.name}" }
                    }
                    div {
                        class: "card__body",
                        h2 { "{item.name}" }
                        p { class: "muted", "{item.description}" }
                        div {
                            class: "card__row",
                            strong { class: "price", "{format_brl(item.price)}" }
                            span {
                                class: "rating",
                                Icon { icon: FaStar, width: 16, height: 16 }
                                " {item.rating}"
                            }
                        }
                        div {
                            class: "card__meta",
                            Icon { icon: FaClock, width: 12, height: 12 }
                            span { " {item.time}" }
                            Icon { icon: FaTruck, width: 12, height: 12 }
                            span { " Delivery: {format_brl(item.delivery)}" }
                        }
                        div {
                            class: "order-row",
                            div {
                                class: "stepper",
                                button {
                                    class: "icon-button",
                                    title: "Diminuir",
                                    onclick: move |_| quantity.set(quantity().decrement()),
                                    Icon { icon: FaMinus, width: 12, height: 12 }
                                }
                                input {
                                    r#type: "number",
                                    min: "1",
                                    value: "{quantity().get()}",
                                    oninput: move |evt: FormEvent| quantity.set(Quantity::parse(&evt.value())),
                                }
                                button {
                                    class: "icon-button",
                                    title: "Aumentar",
                                    onclick: move |_| quantity.set(quantity().increment()),
                                    Icon { icon: FaPlus, width: 12, height: 12 }
                                }
                            }
                            button {
                                class: "primary",
                                "Adicionar ao carrinho - {format_brl(item.total_for(quantity()))}"
                            }
                        }
                    }
                }
            }
        }
    }
}
