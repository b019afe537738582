use api::{auth, Access, Redirect};
use dioxus::prelude::*;

use crate::icons::{FaDollarSign, FaEnvelope, FaUser};
use crate::status::{ErrorBanner, LoadStatus};
use crate::{use_clients, use_loader, use_session, Icon, LogoutButton, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The signed-in user's catalog record, logout and account deletion.
#[component]
pub fn ProfileView(on_redirect: EventHandler<Redirect>, on_back: EventHandler<()>) -> Element {
    let session = use_session();
    let gate = session.read().gate();

    if let Err(redirect) = gate.check(Access::Authenticated) {
        on_redirect.call(redirect);
        return rsx! {};
    }
    let Some(user_id) = gate.user_id().map(str::to_string) else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar {
            title: "Perfil do Usuário",
            on_back,
            LogoutButton { on_logout: move |_| on_redirect.call(Redirect::Login), class: "secondary" }
        }
        main {
            class: "page page--narrow",
            ProfileCard { key: "{user_id}", user_id, on_redirect }
        }
    }
}

#[component]
fn ProfileCard(user_id: String, on_redirect: EventHandler<Redirect>) -> Element {
    let mut session = use_session();
    let clients = use_clients();
    let catalog = clients.catalog.clone();
    let user = use_loader(user_id, move |id: String| {
        let api = catalog.clone();
        async move { api.user(&id).await }
    });
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let handle_delete = move |_| {
        let mesa = clients.mesa.clone();
        spawn(async move {
            delete_error.set(None);
            deleting.set(true);
            let mut next = session.peek().clone();
            let result = auth::delete_account(&mesa, &mut next).await;
            deleting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Account deleted");
                    session.set(next);
                    on_redirect.call(Redirect::Login);
                }
                Err(e) => delete_error.set(Some(e.user_message().to_string())),
            }
        });
    };

    let state = user.state();
    let state = state.read();

    rsx! {
        LoadStatus { loading: state.is_loading(), error: state.error.clone() }

        if let Some(u) = state.data() {
            div {
                class: "card profile-card",
                div {
                    class: "profile-card__line profile-card__name",
                    Icon { icon: FaUser, width: 28, height: 28 }
                    h2 { "{u.display_name()}" }
                }
                div {
                    class: "profile-card__line",
                    Icon { icon: FaEnvelope, width: 16, height: 16 }
                    span { "{u.email}" }
                }
                div {
                    class: "profile-card__line",
                    Icon { icon: FaDollarSign, width: 16, height: 16 }
                    span { "{u.saldo_label()}" }
                }

                if let Some(err) = delete_error() {
                    ErrorBanner { message: err }
                }

                div {
                    class: "card-actions card-actions--end",
                    button {
                        class: "danger",
                        disabled: deleting(),
                        onclick: handle_delete,
                        "Excluir Conta"
                    }
                }
            }
        }
    }
}
