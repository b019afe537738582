use api::models::Mesa;
use api::{Access, Gate, MutationForm, Redirect, MESA_FORM};
use dioxus::prelude::*;

use crate::entity_form::EntityForm;
use crate::icons::FaPlus;
use crate::status::{ErrorBanner, LoadStatus};
use crate::table_section::TableSection;
use crate::views::ModalOverlay;
use crate::{use_clients, use_loader, use_session, Icon, LogoutButton, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page: the signed-in mestre's tables.
///
/// The gate is checked before anything is loaded. An anonymous visitor is
/// redirected and no request is sent, because the loaders live in
/// [`TablesBoard`], which is only mounted for a known user.
#[component]
pub fn HomeView(
    on_redirect: EventHandler<Redirect>,
    on_profile: EventHandler<()>,
    on_restaurants: EventHandler<()>,
) -> Element {
    let session = use_session();
    let gate = session.read().gate();

    if let Err(redirect) = gate.check(Access::Authenticated) {
        tracing::info!("Landing page needs a session, redirecting");
        on_redirect.call(redirect);
        return rsx! {};
    }
    let Some(user_id) = gate.user_id().map(str::to_string) else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar {
            title: "Minhas Mesas",
            on_profile,
            button {
                class: "secondary",
                onclick: move |_| on_restaurants.call(()),
                "Restaurantes"
            }
            LogoutButton { on_logout: move |_| on_redirect.call(Redirect::Login), class: "secondary" }
        }
        main {
            class: "page",
            TablesBoard { key: "{user_id}", gate }
        }
    }
}

/// Table list for the signed-in mestre, with create and edit.
#[component]
fn TablesBoard(gate: Gate) -> Element {
    let clients = use_clients();
    let mesa_api = clients.mesa.clone();
    let owner = gate.user_id().map(str::to_string);
    let mut tables = use_loader(gate, move |gate: Gate| {
        let api = mesa_api.clone();
        async move { api.tables_for(&gate).await }
    });

    let mut editing = use_signal(|| Option::<MutationForm>::None);
    let mut form_error = use_signal(|| Option::<String>::None);

    let edit_table = move |mesa: Mesa| match MutationForm::edit(MESA_FORM, &mesa) {
        Ok(form) => editing.set(Some(form)),
        Err(e) => form_error.set(Some(e.user_message().to_string())),
    };

    let state = tables.state();
    let state = state.read();

    rsx! {
        div {
            class: "page-toolbar",
            button {
                class: "primary",
                onclick: move |_| editing.set(Some(MutationForm::create(MESA_FORM))),
                Icon { icon: FaPlus, width: 14, height: 14 }
                " Criar Nova Mesa"
            }
        }

        if let Some(err) = form_error() {
            ErrorBanner { message: err }
        }

        LoadStatus { loading: state.is_loading(), error: state.error.clone() }

        if let Some(list) = state.data() {
            if list.is_empty() {
                p { class: "muted", "Você ainda não tem mesas" }
            }
            for mesa in list.iter().cloned() {
                TableSection {
                    key: "{mesa.id}",
                    mesa,
                    on_edit: edit_table,
                    on_deleted: move |_| tables.reload(),
                }
            }
        }

        if let Some(form) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                EntityForm {
                    form,
                    scope: owner.clone(),
                    on_saved: move |_| {
                        editing.set(None);
                        tables.reload();
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::{MemoryTransport, Session};
    use dioxus::dioxus_core::VirtualDom;
    use serde_json::json;
    use store::{FileStore, SessionStore};

    use super::*;
    use crate::loader::tests::{memory_clients, settle};

    #[derive(Clone)]
    struct Landing {
        transport: MemoryTransport,
        store: FileStore,
        redirects: Rc<RefCell<Vec<Redirect>>>,
    }

    fn landing(props: Landing) -> Element {
        let transport = props.transport.clone();
        use_context_provider(|| memory_clients(&transport));
        let store = props.store.clone();
        use_context_provider(|| Signal::new(Session::restore(store)));
        let redirects = props.redirects.clone();

        rsx! {
            HomeView {
                on_redirect: move |redirect: Redirect| redirects.borrow_mut().push(redirect),
                on_profile: |_| {},
                on_restaurants: |_| {},
            }
        }
    }

    async fn visit(transport: &MemoryTransport, store: FileStore) -> Vec<Redirect> {
        let redirects = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(
            landing,
            Landing {
                transport: transport.clone(),
                store,
                redirects: redirects.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        let seen = redirects.borrow().clone();
        seen
    }

    #[tokio::test]
    async fn test_anonymous_visit_redirects_without_requests() {
        let dir = tempfile::tempdir().unwrap();
        let transport = MemoryTransport::new();

        let redirects = visit(&transport, FileStore::new(dir.path().to_path_buf())).await;

        assert_eq!(redirects.first(), Some(&Redirect::Login));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_signed_in_visit_loads_own_tables() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.save("u1");
        let transport = MemoryTransport::new().with_collection(
            "Mesa",
            vec![json!({ "id": "1", "nome": "Floresta", "mestreId": "u1" })],
        );

        let redirects = visit(&transport, store).await;

        assert!(redirects.is_empty());
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://mesas.test/Mesa");
        assert_eq!(requests[0].query_param("mestreId"), Some("u1"));
    }
}
