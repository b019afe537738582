use api::models::Atributos;
use api::{FieldKind, FieldSpec, MutationForm};
use dioxus::prelude::*;

use crate::status::ErrorBanner;
use crate::use_clients;

/// Form for creating or editing any Mesa API entity.
///
/// The fields come from the form's [`api::EntitySchema`]. `scope` is the
/// owning identifier (mestre for tables, table for sheets). On success
/// `on_saved` fires once; on failure the form stays open with its values.
#[component]
pub fn EntityForm(
    form: MutationForm,
    scope: Option<String>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let clients = use_clients();
    let schema = *form.schema();
    let draft = use_signal(move || form);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let title = if draft.read().is_edit() {
        format!("Editar {}", schema.title)
    } else {
        format!("Nova {}", schema.title)
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mesa = clients.mesa.clone();
        let scope = scope.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            let current = draft();
            let result = current
                .submit(&mesa, scope.as_deref(), |_| on_saved.call(()))
                .await;
            saving.set(false);
            if let Err(e) = result {
                error.set(Some(e.user_message().to_string()));
            }
        });
    };

    rsx! {
        form {
            class: "entity-form",
            onsubmit: handle_submit,
            h2 { "{title}" }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            for spec in schema.fields.iter().copied() {
                FieldInput { key: "{spec.name}", spec, draft }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Salvando..." } else { "Salvar" }
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
            }
        }
    }
}

#[component]
fn FieldInput(spec: FieldSpec, draft: Signal<MutationForm>) -> Element {
    let mut draft = draft;
    let id = format!("field-{}", spec.name);
    let placeholder = if spec.kind == FieldKind::List { "Uma por linha" } else { "" };

    let input = match spec.kind {
        FieldKind::Text => rsx! {
            input {
                id: "{id}",
                r#type: "text",
                value: draft.read().text(spec.name),
                oninput: move |evt: FormEvent| draft.write().set_text(spec.name, &evt.value()),
            }
        },
        FieldKind::LongText | FieldKind::List => rsx! {
            textarea {
                id: "{id}",
                rows: 3,
                placeholder,
                value: draft.read().text(spec.name),
                oninput: move |evt: FormEvent| draft.write().set_text(spec.name, &evt.value()),
            }
        },
        FieldKind::Stats => rsx! {
            div {
                class: "stats-grid",
                for (index, stat_label) in Atributos::LABELS.iter().enumerate() {
                    label {
                        key: "{index}",
                        class: "stat-input",
                        span { "{stat_label}" }
                        input {
                            r#type: "number",
                            value: "{draft.read().stat(spec.name, index)}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(n) = evt.value().trim().parse::<i64>() {
                                    draft.write().set_stat(spec.name, index, n);
                                }
                            },
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{spec.label}" }
            {input}
        }
    }
}
