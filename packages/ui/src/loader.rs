use std::future::Future;

use api::{ClientError, LoaderState};
use dioxus::prelude::*;

/// Handle to a page's view of one remote read.
///
/// The state signal re-renders the page when a read settles. `reload`
/// re-runs the read with the current dependencies, which is how pages show
/// the effect of a mutation.
pub struct Loader<T: 'static> {
    state: Signal<LoaderState<T>>,
    refresh: Signal<u64>,
}

impl<T: 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loader<T> {}

impl<T: 'static> Loader<T> {
    pub fn state(&self) -> Signal<LoaderState<T>> {
        self.state
    }

    pub fn reload(&mut self) {
        *self.refresh.write() += 1;
    }
}

/// Run `fetch(deps)` on mount and again whenever `deps` changes or
/// [`Loader::reload`] is called.
///
/// With `deps = ()` the read happens exactly once per mount. Responses that
/// arrive after a newer read started are discarded by [`LoaderState`].
pub fn use_loader<D, T, F, Fut>(deps: D, mut fetch: F) -> Loader<T>
where
    D: PartialEq + Clone + 'static,
    T: 'static,
    F: FnMut(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let mut state = use_signal(LoaderState::<T>::default);
    let refresh = use_signal(|| 0u64);

    let _resource = use_resource(use_reactive((&deps,), move |(deps,)| {
        // Subscribe so `reload` re-runs the read
        let _generation = refresh();
        let request = fetch(deps);
        async move {
            let ticket = state.write().begin();
            let result = request.await;
            state.write().settle(ticket, result);
        }
    }));

    Loader { state, refresh }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use api::models::{Mesa, Restaurant};
    use api::{ApiConfig, MemoryTransport};
    use dioxus::dioxus_core::VirtualDom;
    use serde_json::json;

    use super::*;
    use crate::clients::{AppTransport, Clients};

    pub(crate) fn config() -> ApiConfig {
        ApiConfig {
            api_url: "http://mesas.test".into(),
            catalog_url: "http://catalog.test".into(),
            ..ApiConfig::default()
        }
    }

    pub(crate) fn memory_clients(transport: &MemoryTransport) -> Clients {
        Clients::with_transport(AppTransport::Memory(transport.clone()), &config())
    }

    /// Drive spawned reads and re-renders until the dom goes quiet.
    pub(crate) async fn settle(dom: &mut VirtualDom) {
        for _ in 0..32 {
            match tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await {
                Ok(()) => {
                    dom.render_immediate_to_vec();
                }
                Err(_) => break,
            }
        }
    }

    type Slot<T> = Rc<RefCell<Option<T>>>;

    #[derive(Clone)]
    struct Harness<T> {
        transport: MemoryTransport,
        slot: Slot<T>,
    }

    fn once_page(props: Harness<Loader<Vec<Restaurant>>>) -> Element {
        let clients = use_hook(|| memory_clients(&props.transport));
        let loader = use_loader((), move |()| {
            let api = clients.catalog.clone();
            async move { api.restaurants().await }
        });
        *props.slot.borrow_mut() = Some(loader);
        rsx! {}
    }

    fn keyed_page(props: Harness<(Signal<String>, Loader<Vec<Mesa>>)>) -> Element {
        let clients = use_hook(|| memory_clients(&props.transport));
        let owner = use_signal(|| "u1".to_string());
        let loader = use_loader(owner(), move |owner: String| {
            let api = clients.mesa.clone();
            async move { api.list_tables(&owner).await }
        });
        *props.slot.borrow_mut() = Some((owner, loader));
        rsx! {}
    }

    fn mesas() -> MemoryTransport {
        MemoryTransport::new().with_collection(
            "Mesa",
            vec![
                json!({ "id": "1", "nome": "Floresta", "mestreId": "u1" }),
                json!({ "id": "2", "nome": "Cidade", "mestreId": "u2" }),
                json!({ "id": "3", "nome": "Porto", "mestreId": "u2" }),
            ],
        )
    }

    #[tokio::test]
    async fn test_unit_key_reads_once_per_mount() {
        let transport = MemoryTransport::new();
        let slot: Slot<Loader<Vec<Restaurant>>> = Rc::default();
        let mut dom = VirtualDom::new_with_props(
            once_page,
            Harness {
                transport: transport.clone(),
                slot: slot.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        assert_eq!(transport.request_count(), 1);
        let loader = slot.borrow().expect("page rendered");
        let settled = dom.in_runtime(|| {
            let state = loader.state();
            let state = state.read();
            !state.is_loading() && state.data().is_some_and(Vec::is_empty)
        });
        assert!(settled);
    }

    #[tokio::test]
    async fn test_key_change_and_reload_read_again() {
        let transport = mesas();
        let slot: Slot<(Signal<String>, Loader<Vec<Mesa>>)> = Rc::default();
        let mut dom = VirtualDom::new_with_props(
            keyed_page,
            Harness {
                transport: transport.clone(),
                slot: slot.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(transport.request_count(), 1);

        let (mut owner, mut loader) = slot.borrow().expect("page rendered");
        dom.in_runtime(|| owner.set("u2".to_string()));
        settle(&mut dom).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].query_param("mestreId"), Some("u2"));
        let count = dom.in_runtime(|| loader.state().read().data().map(Vec::len));
        assert_eq!(count, Some(2));

        dom.in_runtime(|| loader.reload());
        settle(&mut dom).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].query_param("mestreId"), Some("u2"));
    }
}
