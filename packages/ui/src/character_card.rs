use api::models::Ficha;
use dioxus::prelude::*;

use crate::icons::{FaPen, FaTrash};
use crate::views::ModalOverlay;
use crate::Icon;

/// One character sheet in a table's list.
#[component]
pub fn CharacterCard(
    ficha: Ficha,
    on_open: EventHandler<Ficha>,
    on_edit: EventHandler<Ficha>,
    on_delete: EventHandler<String>,
) -> Element {
    let open = ficha.clone();
    let edit = ficha.clone();
    let id = ficha.id.clone();

    rsx! {
        div {
            class: "character-card",
            button {
                class: "character-card__name",
                onclick: move |_| on_open.call(open.clone()),
                "{ficha.nome}"
            }
            span { class: "character-card__class", "{ficha.classe}" }
            div {
                class: "card-actions",
                button {
                    class: "icon-button",
                    title: "Editar",
                    onclick: move |_| on_edit.call(edit.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                button {
                    class: "icon-button icon-button--danger",
                    title: "Excluir",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}

/// Read-only view of a whole character sheet.
#[component]
pub fn CharacterDetail(ficha: Ficha, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close,
            div {
                class: "character-detail",
                h2 { "{ficha.nome}" }
                p { strong { "Classe: " } "{ficha.classe}" }
                if !ficha.descricao.is_empty() {
                    p { class: "character-detail__description", "{ficha.descricao}" }
                }

                h3 { "Habilidades" }
                if ficha.habilidades.is_empty() {
                    p { class: "muted", "Nenhuma habilidade" }
                } else {
                    ul {
                        for (i, skill) in ficha.habilidades.iter().enumerate() {
                            li { key: "{i}", "{skill}" }
                        }
                    }
                }

                h3 { "Atributos" }
                div {
                    class: "stats-grid",
                    for (label, value) in ficha.atributos.labeled() {
                        div {
                            key: "{label}",
                            class: "stat",
                            span { class: "stat__label", "{label}" }
                            span { class: "stat__value", "{value}" }
                        }
                    }
                }

                button {
                    class: "secondary",
                    onclick: move |_| on_close.call(()),
                    "Fechar"
                }
            }
        }
    }
}
