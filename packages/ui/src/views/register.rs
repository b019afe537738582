use api::{auth, Access, Redirect};
use dioxus::prelude::*;

use crate::status::ErrorBanner;
use crate::{use_clients, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Account creation on the Mesa API (`POST /Mestre`).
///
/// Does not sign in: `on_registered` fires after a successful create so the
/// caller can send the user to the login page.
#[component]
pub fn RegisterView(
    on_redirect: EventHandler<Redirect>,
    on_registered: EventHandler<()>,
    on_login: EventHandler<()>,
) -> Element {
    let session = use_session();
    let clients = use_clients();
    let mut nome = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Err(redirect) = session.read().gate().check(Access::GuestOnly) {
        on_redirect.call(redirect);
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let mesa = clients.mesa.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = auth::register(&mesa, &nome(), &senha()).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Account created for {}", nome());
                    on_registered.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h3 { class: "auth-card__title", "Criar Conta" }

                form {
                    onsubmit: handle_register,
                    div {
                        class: "form-field",
                        label { r#for: "nome", "Nome" }
                        input {
                            id: "nome",
                            r#type: "text",
                            placeholder: "Digite seu nome",
                            required: true,
                            value: nome(),
                            oninput: move |evt: FormEvent| nome.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "password", "Senha" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Digite sua senha",
                            required: true,
                            value: senha(),
                            oninput: move |evt: FormEvent| senha.set(evt.value()),
                        }
                    }
                    button {
                        class: "primary wide",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Cadastrando..." } else { "Cadastrar" }
                    }
                }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                p {
                    class: "auth-card__footer",
                    "Já tem uma conta? "
                    button {
                        class: "link-button",
                        onclick: move |_| on_login.call(()),
                        "Entrar"
                    }
                }
            }
        }
    }
}
