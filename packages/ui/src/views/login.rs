use api::{auth, Access, Redirect};
use dioxus::prelude::*;

use crate::status::ErrorBanner;
use crate::{use_clients, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Email/password login against the catalog user list.
///
/// Guest-only: a signed-in visitor is sent home.
#[component]
pub fn LoginView(on_redirect: EventHandler<Redirect>, on_register: EventHandler<()>) -> Element {
    let mut session = use_session();
    let clients = use_clients();
    let mut email = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Err(redirect) = session.read().gate().check(Access::GuestOnly) {
        on_redirect.call(redirect);
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let catalog = clients.catalog.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            // Work on a copy so no signal borrow is held across the request
            let mut next = session.peek().clone();
            let result = auth::sign_in(&catalog, &mut next, &email(), &senha()).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.display_name());
                    session.set(next);
                    on_redirect.call(Redirect::Home);
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
                h3 { class: "auth-card__title", "Bem-vindo" }
                p { class: "auth-card__subtitle", "Faça login na sua conta" }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Digite seu email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
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
                        if loading() { "Entrando..." } else { "Login" }
                    }
                }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                p {
                    class: "auth-card__footer",
                    "Não tem uma conta? "
                    button {
                        class: "link-button",
                        onclick: move |_| on_register.call(()),
                        "Registre-se"
                    }
                }
            }
        }
    }
}
