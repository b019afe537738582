use api::models::{Ficha, Mesa};
use api::{Collection, MutationForm, FICHA_FORM};
use dioxus::prelude::*;

use crate::character_card::{CharacterCard, CharacterDetail};
use crate::entity_form::EntityForm;
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::status::{ErrorBanner, LoadStatus};
use crate::views::ModalOverlay;
use crate::{use_clients, use_loader, Icon};

/// A table with its character sheets.
///
/// Owns the sheets loader for this table and re-runs it after every sheet
/// mutation. Deleting the table itself is reported through `on_deleted` so
/// the board can reload the table list.
#[component]
pub fn TableSection(
    mesa: Mesa,
    on_edit: EventHandler<Mesa>,
    on_deleted: EventHandler<()>,
) -> Element {
    let clients = use_clients();
    let sheets_api = clients.mesa.clone();
    let mut sheets = use_loader(mesa.id.clone(), move |table: String| {
        let api = sheets_api.clone();
        async move { api.list_sheets(&table).await }
    });

    let mut editing = use_signal(|| Option::<MutationForm>::None);
    let mut viewing = use_signal(|| Option::<Ficha>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let delete_api = clients.mesa.clone();
    let delete_sheet = move |id: String| {
        let api = delete_api.clone();
        spawn(async move {
            action_error.set(None);
            match api.delete(Collection::Ficha, &id).await {
                Ok(()) => sheets.reload(),
                Err(e) => {
                    tracing::error!("Failed to delete ficha {id}: {e}");
                    action_error.set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    let table_api = clients.mesa.clone();
    let table_id = mesa.id.clone();
    let delete_table = move |_| {
        let api = table_api.clone();
        let id = table_id.clone();
        spawn(async move {
            action_error.set(None);
            match api.delete(Collection::Mesa, &id).await {
                Ok(()) => on_deleted.call(()),
                Err(e) => {
                    tracing::error!("Failed to delete mesa {id}: {e}");
                    action_error.set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    let edit_sheet = move |ficha: Ficha| match MutationForm::edit(FICHA_FORM, &ficha) {
        Ok(form) => editing.set(Some(form)),
        Err(e) => action_error.set(Some(e.user_message().to_string())),
    };

    let state = sheets.state();
    let state = state.read();
    let edit_mesa = mesa.clone();

    rsx! {
        section {
            class: "table-section",
            header {
                class: "table-section__header",
                div {
                    h2 { "{mesa.nome}" }
                    if !mesa.tema.is_empty() {
                        span { class: "badge", "{mesa.tema}" }
                    }
                }
                div {
                    class: "card-actions",
                    button {
                        class: "icon-button",
                        title: "Editar mesa",
                        onclick: move |_| on_edit.call(edit_mesa.clone()),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button icon-button--danger",
                        title: "Excluir mesa",
                        onclick: delete_table,
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
            if !mesa.descricao.is_empty() {
                p { class: "table-section__description", "{mesa.descricao}" }
            }

            if let Some(err) = action_error() {
                ErrorBanner { message: err }
            }

            LoadStatus { loading: state.is_loading(), error: state.error.clone() }

            if let Some(list) = state.data() {
                if list.is_empty() {
                    p { class: "muted", "Nenhum personagem nesta mesa" }
                }
                div {
                    class: "character-list",
                    for ficha in list.iter().cloned() {
                        CharacterCard {
                            key: "{ficha.id}",
                            ficha,
                            on_open: move |f| viewing.set(Some(f)),
                            on_edit: edit_sheet,
                            on_delete: delete_sheet.clone(),
                        }
                    }
                }
            }

            button {
                class: "secondary",
                onclick: move |_| editing.set(Some(MutationForm::create(FICHA_FORM))),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Adicionar Personagem"
            }
        }

        if let Some(form) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                EntityForm {
                    form,
                    scope: Some(mesa.id.clone()),
                    on_saved: move |_| {
                        editing.set(None);
                        sheets.reload();
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }
        }

        if let Some(ficha) = viewing() {
            CharacterDetail { ficha, on_close: move |_| viewing.set(None) }
        }
    }
}
